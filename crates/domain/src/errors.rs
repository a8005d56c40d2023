//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Attempted to address a vehicle field that does not exist
    #[error("Invalid filter field: {0}")]
    InvalidFilterField(String),
}

/// Errors raised while turning a raw mapping into a vehicle record
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Missing field or field of the wrong shape
    #[error("Malformed vehicle record: {0}")]
    Malformed(String),

    /// Coordinates decoded but out of range
    #[error("Vehicle record has {0}")]
    InvalidCoordinates(InvalidCoordinates),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_field_message() {
        let err = DomainError::InvalidFilterField("wheels".to_string());
        assert_eq!(err.to_string(), "Invalid filter field: wheels");
    }

    #[test]
    fn decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DecodeError::from(serde_err);
        assert!(err.to_string().starts_with("Malformed vehicle record"));
    }

    #[test]
    fn invalid_coordinates_convert() {
        let err: DomainError = InvalidCoordinates {
            latitude: 91.0,
            longitude: 0.0,
        }
        .into();
        assert!(matches!(err, DomainError::InvalidCoordinates(_)));
    }
}
