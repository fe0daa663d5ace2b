use super::super::utils::MacAddr;

const SYNCHRONIZATION_STREAM: [u8; 6] = [0xFF; 6];
const ADDRESS_REPETITIONS: usize = 16;

pub const MAGIC_PACKET_SIZE: usize = SYNCHRONIZATION_STREAM.len() + ADDRESS_REPETITIONS * 6;

/// The fixed-format Wake-on-LAN payload: a 6 byte synchronization stream
/// followed by the hardware address repeated 16 times.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MagicPacket {
    payload: [u8; MAGIC_PACKET_SIZE],
}

impl MagicPacket {
    pub fn new(mac: &MacAddr) -> Self {
        let mut payload = [0u8; MAGIC_PACKET_SIZE];
        payload[..SYNCHRONIZATION_STREAM.len()].copy_from_slice(&SYNCHRONIZATION_STREAM);
        for repetition in payload[SYNCHRONIZATION_STREAM.len()..].chunks_exact_mut(6) {
            repetition.copy_from_slice(mac.as_bytes());
        }

        Self { payload }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }
}
