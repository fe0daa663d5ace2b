use std::sync::Arc;

use crate::configuration;
use crate::networking::{WakeOnLanServer, WakeupServer};

pub struct Factory {}

impl Factory {
    pub fn create_wakeup_server(network: &configuration::Network) -> Arc<dyn WakeupServer> {
        Arc::new(WakeOnLanServer::new(network))
    }
}

#[cfg(test)]
pub mod test {
    use rstest::*;

    use crate::networking::MockWakeupServer;

    #[fixture]
    pub fn mocked_wakeup_server() -> MockWakeupServer {
        MockWakeupServer::new()
    }
}
