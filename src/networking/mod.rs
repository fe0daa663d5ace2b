pub mod magic_packet;
pub mod transmit_error;
pub mod wake_on_lan_server;
pub mod wakeup_server;

pub use magic_packet::MagicPacket;
pub use transmit_error::TransmitError;
pub use wake_on_lan_server::WakeOnLanServer;
pub use wakeup_server::WakeupServer;

#[cfg(test)]
pub use wakeup_server::MockWakeupServer;
