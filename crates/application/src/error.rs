//! Application-level errors

use domain::{DecodeError, DomainError};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Network failure, timeout, or non-success status from the inventory service
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body did not match the vehicle shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Update attempted on a record without an identifier
    #[error("Vehicle ID must be provided for updating")]
    MissingIdentifier,

    /// Filter criterion names a field vehicles do not have
    #[error("Invalid filter field: {0}")]
    InvalidFilterField(String),
}

impl ApplicationError {
    /// Whether the caller supplied bad input (as opposed to a remote failure)
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingIdentifier | Self::InvalidFilterField(_) | Self::Domain(_)
        )
    }
}

impl From<DecodeError> for ApplicationError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}
