use std::fmt;

#[derive(Debug)]
pub enum TransmitError {
    ChannelSetupFailed(std::io::Error),
    SendFailed(std::io::Error),
}

impl std::error::Error for TransmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ChannelSetupFailed(e) | Self::SendFailed(e) => Some(e),
        }
    }
}

impl fmt::Display for TransmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelSetupFailed(e) => {
                write!(f, "[TransmitError] failed to set up the broadcast socket: {}", e)
            }
            Self::SendFailed(e) => {
                write!(f, "[TransmitError] failed to send the magic packet: {}", e)
            }
        }
    }
}
