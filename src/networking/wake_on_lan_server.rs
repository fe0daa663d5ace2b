use std::net::{SocketAddr, UdpSocket};

use log::{debug, warn};

use super::super::configuration;
use super::super::utils::MacAddr;
use super::{MagicPacket, TransmitError, WakeupServer};

pub struct WakeOnLanServer {
    broadcast: SocketAddr,
}

impl WakeOnLanServer {
    pub fn new(network: &configuration::Network) -> Self {
        Self {
            broadcast: SocketAddr::new(network.broadcast_ip, network.port),
        }
    }
}

impl WakeupServer for WakeOnLanServer {
    fn wakeup(&self, mac: &MacAddr) -> Result<(), TransmitError> {
        debug!(
            "sending wake-on-lan packet for {} to {}",
            mac, self.broadcast
        );

        // the socket only lives for a single send and is released again once
        // it goes out of scope
        let socket = match UdpSocket::bind(("0.0.0.0", 0)) {
            Err(e) => {
                warn!("failed to bind a UDP socket: {}", e);
                return Err(TransmitError::ChannelSetupFailed(e));
            }
            Ok(socket) => socket,
        };

        if let Err(e) = socket.set_broadcast(true) {
            warn!("failed to enable broadcasting on the UDP socket: {}", e);
            return Err(TransmitError::ChannelSetupFailed(e));
        }

        let packet = MagicPacket::new(mac);
        match socket.send_to(packet.as_bytes(), self.broadcast) {
            Err(e) => {
                warn!(
                    "failed to send wake-on-lan packet for {} to {}: {}",
                    mac, self.broadcast, e
                );
                Err(TransmitError::SendFailed(e))
            }
            Ok(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::*;

    use super::*;

    #[rstest]
    fn test_wakeup_sends_the_magic_packet() {
        // an unrelated UDP socket stands in for the broadcast target
        let receiver = UdpSocket::bind(("127.0.0.1", 0)).unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let target = receiver.local_addr().unwrap();

        let network = configuration::Network {
            default_mac: None,
            broadcast_ip: target.ip(),
            port: target.port(),
        };
        let mac: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();

        WakeOnLanServer::new(&network).wakeup(&mac).unwrap();

        let mut buffer = [0u8; 128];
        let (received, _) = receiver.recv_from(&mut buffer).unwrap();
        assert_eq!(received, 102);
        assert_eq!(&buffer[..6], [0xFF; 6]);
        for repetition in buffer[6..102].chunks(6) {
            assert_eq!(repetition, mac.as_bytes());
        }
    }
}
