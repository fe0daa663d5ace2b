#[cfg(test)]
use mockall::automock;

use super::super::utils::MacAddr;
use super::TransmitError;

#[cfg_attr(test, automock)]
pub trait WakeupServer: Send + Sync {
    fn wakeup(&self, mac: &MacAddr) -> Result<(), TransmitError>;
}
