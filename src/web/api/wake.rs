use std::sync::Arc;

use log::{debug, warn};
use rocket::get;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

use super::result::{self, WakeResponse};
use super::WakeError;
use crate::configuration::{Configuration, ConfigurationError};
use crate::networking::WakeupServer;
use crate::utils::MacAddr;

fn wake_default(config: &Configuration, server: &dyn WakeupServer) -> Result<(), WakeError> {
    let mac = config.network.default_mac.ok_or_else(|| {
        ConfigurationError::new("no default hardware address configured".to_string())
    })?;

    Ok(server.wakeup(&mac)?)
}

fn wake_address(address: &str, server: &dyn WakeupServer) -> Result<(), WakeError> {
    let mac: MacAddr = address.parse()?;

    Ok(server.wakeup(&mac)?)
}

// every failure is rendered into the same generic error shape but logged by kind
fn log_failure(error: &WakeError) {
    match error {
        WakeError::Validation(error) => debug!("{}", error),
        WakeError::Transmit(error) => warn!("{}", error),
        WakeError::Configuration(error) => warn!("{}", error),
    }
}

/// # Wake the default device
///
/// Broadcasts a Wake-on-LAN magic packet for the configured default hardware
/// address.
#[openapi(tag = "Wake")]
#[get("/wake")]
pub fn get_wake(
    config: &rocket::State<Configuration>,
    wakeup_server: &rocket::State<Arc<dyn WakeupServer>>,
) -> Json<WakeResponse> {
    result::handle(
        match wake_default(config.inner(), wakeup_server.inner().as_ref()) {
            Ok(()) => Ok("Wake-on-LAN packet sent successfully".to_string()),
            Err(e) => {
                log_failure(&e);
                Err(format!("Failed to send Wake-on-LAN packet: {}", e))
            }
        },
    )
}

/// # Wake an explicit device
///
/// Broadcasts a Wake-on-LAN magic packet for the hardware address given in the
/// request path. The unused query parameter `q` is accepted for forward
/// compatibility.
#[openapi(tag = "Wake")]
#[get("/wake/<address>?<q>")]
#[allow(unused_variables)]
pub fn get_wake_address(
    address: String,
    q: Option<String>,
    wakeup_server: &rocket::State<Arc<dyn WakeupServer>>,
) -> Json<WakeResponse> {
    result::handle(
        match wake_address(&address, wakeup_server.inner().as_ref()) {
            Ok(()) => Ok(format!(
                "Wake-on-LAN packet sent successfully to {} device!",
                address
            )),
            Err(e) => {
                log_failure(&e);
                Err(format!(
                    "Failed to send Wake-on-LAN packet to {} device: {}",
                    address, e
                ))
            }
        },
    )
}
