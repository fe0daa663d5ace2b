pub mod mac_addr;

pub use mac_addr::{MacAddr, ValidationError};
