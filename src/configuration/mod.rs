use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod network;
mod web;

pub use network::Network;
pub use web::Web;

pub const LOCATION: &str = "/etc/wol-api-rs/wol-api-rs.json";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub web: Web,
}

#[derive(Debug, Clone)]
pub struct ConfigurationError(String);

impl ConfigurationError {
    pub fn new(error_msg: String) -> Self {
        Self(error_msg)
    }
}

impl std::error::Error for ConfigurationError {}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ConfigurationError] {}", self.0)
    }
}

pub fn parse_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Configuration> {
    // Open the file in read-only mode with buffer.
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    // Read the JSON contents of the file as an instance of `Configuration`.
    let config: Configuration = serde_json::from_reader(reader)?;
    Ok(config)
}

#[allow(dead_code)]
pub fn parse_from_str(s: &str) -> serde_json::Result<Configuration> {
    serde_json::from_str(s)
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use rstest::*;
    use serde_json::json;
    use temp_dir::TempDir;

    use super::*;

    static DEFAULT_MAC: &str = "AA:BB:CC:DD:EE:FF";

    #[rstest]
    fn test_parse_from_str() {
        let config_json = json!({
            "network": {
                "defaultMac": "aa:bb:cc:dd:ee:ff",
                "broadcastIp": "192.168.1.255",
                "port": 7
            },
            "web": {
                "ip": "127.0.0.1",
                "port": 8080
            }
        });

        let config = parse_from_str(&config_json.to_string()).unwrap();
        assert_eq!(
            config.network.default_mac,
            Some(DEFAULT_MAC.parse().unwrap())
        );
        assert_eq!(
            config.network.broadcast_ip,
            "192.168.1.255".parse::<IpAddr>().unwrap()
        );
        assert_eq!(config.network.port, 7);
        assert_eq!(config.web.ip, "127.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(config.web.port, 8080);
    }

    #[rstest]
    fn test_parse_from_str_with_defaults() {
        let config = parse_from_str("{}").unwrap();

        assert_eq!(config, Configuration::default());
        assert_eq!(config.network.default_mac, None);
        assert_eq!(
            config.network.broadcast_ip,
            "255.255.255.255".parse::<IpAddr>().unwrap()
        );
        assert_eq!(config.network.port, 9);
        assert_eq!(config.web.ip, "0.0.0.0".parse::<IpAddr>().unwrap());
        assert_eq!(config.web.port, 8000);
    }

    #[rstest]
    fn test_parse_from_str_rejects_malformed_mac() {
        let config_json = json!({
            "network": {
                "defaultMac": "not-a-mac"
            }
        });

        assert!(parse_from_str(&config_json.to_string()).is_err());
    }

    #[rstest]
    fn test_parse_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("wol-api-rs.json");
        std::fs::write(
            &path,
            json!({ "network": { "defaultMac": DEFAULT_MAC } }).to_string(),
        )
        .unwrap();

        let config = parse_from_file(&path).unwrap();
        assert_eq!(
            config.network.default_mac,
            Some(DEFAULT_MAC.parse().unwrap())
        );
    }

    #[rstest]
    fn test_parse_from_file_example() {
        let mut config_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        config_path.push("wol-api-rs.json.example");

        let config = parse_from_file(config_path);
        assert!(config.is_ok());
    }

    #[rstest]
    fn test_parse_from_missing_file() {
        assert!(parse_from_file("/nonexistent/wol-api-rs.json").is_err());
    }
}
