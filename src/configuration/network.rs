use std::net::IpAddr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::utils::MacAddr;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Hardware address woken by requests which don't name a target.
    #[serde(default)]
    pub default_mac: Option<MacAddr>,
    #[serde(default = "Network::default_broadcast_ip")]
    pub broadcast_ip: IpAddr,
    #[serde(default = "Network::default_port")]
    pub port: u16,
}

impl Network {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_broadcast_ip() -> IpAddr {
        "255.255.255.255".parse().unwrap()
    }

    pub fn default_port() -> u16 {
        9
    }
}

impl Default for Network {
    fn default() -> Self {
        Self {
            default_mac: None,
            broadcast_ip: Network::default_broadcast_ip(),
            port: Network::default_port(),
        }
    }
}
