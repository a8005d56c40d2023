//! Vehicle API error types

use application::ApplicationError;
use thiserror::Error;

/// Errors that can occur while talking to the vehicle inventory service
#[derive(Debug, Error)]
pub enum VehicleApiError {
    /// Connection to the inventory service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// The requested vehicle does not exist
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    /// Failed to parse response from the inventory service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl From<VehicleApiError> for ApplicationError {
    fn from(err: VehicleApiError) -> Self {
        if matches!(err, VehicleApiError::ParseError(_)) {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
