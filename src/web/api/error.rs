use std::fmt;

use crate::configuration::ConfigurationError;
use crate::networking::TransmitError;
use crate::utils::ValidationError;

#[derive(Debug)]
pub enum WakeError {
    Validation(ValidationError),
    Transmit(TransmitError),
    Configuration(ConfigurationError),
}

impl std::error::Error for WakeError {}

impl From<ValidationError> for WakeError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<TransmitError> for WakeError {
    fn from(error: TransmitError) -> Self {
        Self::Transmit(error)
    }
}

impl From<ConfigurationError> for WakeError {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl fmt::Display for WakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => error.fmt(f),
            Self::Transmit(error) => error.fmt(f),
            Self::Configuration(error) => error.fmt(f),
        }
    }
}
