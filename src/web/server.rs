use std::sync::Arc;

use log::warn;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

use super::api::*;
use crate::configuration::Configuration;
use crate::networking::WakeupServer;

pub struct Server {
    name: String,
    version: String,
    config: Configuration,

    wakeup_server: Arc<dyn WakeupServer>,
}

impl Server {
    pub fn new(
        name: &str,
        version: &str,
        config: Configuration,
        wakeup_server: Arc<dyn WakeupServer>,
    ) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            config,
            wakeup_server,
        }
    }

    pub async fn launch(
        &self,
        ip: std::net::IpAddr,
        port: u16,
        log_level: rocket::config::LogLevel,
    ) -> std::result::Result<(), rocket::Error> {
        // create a custom configuration for Rocket
        let mut rocket_config = rocket::Config {
            address: ip,
            port,
            log_level,
            cli_colors: false,
            ..Default::default()
        };

        // configure the "Server" identity
        match rocket::config::Ident::try_new(format!("{}/{}", self.name, self.version)) {
            Ok(ident) => rocket_config.ident = ident,
            Err(e) => warn!("failed to create custom identity for the web API: {}", e),
        };

        let server = rocket(
            &rocket_config,
            self.config.clone(),
            self.wakeup_server.clone(),
        )
        .launch();
        server.await.map(|_| ())
    }

    pub fn get_num_workers() -> usize {
        rocket::Config::from(rocket::Config::figment()).workers
    }

    pub fn get_thread_name(name: &str) -> String {
        // NOTE: graceful shutdown of tokio runtime depends on the "rocket-worker" prefix.
        format!("rocket-worker-{}", name)
    }
}

pub fn rocket(
    rocket_config: &rocket::Config,
    config: Configuration,
    wakeup_server: Arc<dyn WakeupServer>,
) -> Rocket<Build> {
    rocket::custom(rocket_config)
        .mount("/", openapi_get_routes![get_root, get_wake, get_wake_address])
        .mount(
            "/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/rapidoc",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "../openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .manage(config)
        .manage(wakeup_server)
}

#[cfg(test)]
pub mod test {
    use std::sync::Arc;

    use rocket::local::blocking::Client;
    use rstest::*;

    use crate::configuration::Configuration;
    use crate::networking::{MockWakeupServer, WakeupServer};
    use crate::utils::MacAddr;

    pub static DEFAULT_MAC: &str = "AA:BB:CC:DD:EE:FF";

    #[fixture]
    pub fn default_mac() -> MacAddr {
        DEFAULT_MAC.parse().unwrap()
    }

    #[fixture]
    pub fn config() -> Configuration {
        let mut config = Configuration::default();
        config.network.default_mac = Some(default_mac());
        config
    }

    #[fixture]
    pub fn config_without_default_mac() -> Configuration {
        Configuration::default()
    }

    pub fn get_client(config: &Configuration, wakeup_server: MockWakeupServer) -> Client {
        let rocket_config = rocket::Config {
            log_level: rocket::config::LogLevel::Off,
            ..Default::default()
        };

        let rocket = super::rocket(
            &rocket_config,
            config.clone(),
            Arc::new(wakeup_server) as Arc<dyn WakeupServer>,
        );
        Client::tracked(rocket).expect("valid rocket instance")
    }
}
