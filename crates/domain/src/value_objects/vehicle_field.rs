//! Named vehicle attributes and their typed values
//!
//! Used to address record fields by name (e.g. for filtering) without
//! reflective lookup: every known name maps to exactly one accessor.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// An attribute of a vehicle record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleField {
    /// Server-assigned identifier
    Id,
    /// Vehicle name (make)
    Name,
    /// Vehicle model
    Model,
    /// Production year
    Year,
    /// Paint color
    Color,
    /// Price in whole currency units
    Price,
    /// Latitude in degrees
    Latitude,
    /// Longitude in degrees
    Longitude,
}

impl VehicleField {
    /// All fields in wire order
    pub const ALL: [Self; 8] = [
        Self::Id,
        Self::Name,
        Self::Model,
        Self::Year,
        Self::Color,
        Self::Price,
        Self::Latitude,
        Self::Longitude,
    ];

    /// JSON key of this field
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Model => "model",
            Self::Year => "year",
            Self::Color => "color",
            Self::Price => "price",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
        }
    }
}

impl fmt::Display for VehicleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::InvalidFilterField(s.to_string()))
    }
}

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent value (e.g. an unassigned id)
    Null,
    /// Whole number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl FieldValue {
    /// Exact comparison; integers and floats compare numerically
    #[must_use]
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)] // exact match is the filter contract
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                *a as f64 == *b
            },
            _ => self == other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_parses_from_its_name() {
        for field in VehicleField::ALL {
            assert_eq!(field.as_str().parse::<VehicleField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "wheels".parse::<VehicleField>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidFilterField(ref name) if name == "wheels"));
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!("Color".parse::<VehicleField>().is_err());
    }

    #[test]
    fn integer_matches_equal_float() {
        assert!(FieldValue::Integer(2015).matches(&FieldValue::Float(2015.0)));
        assert!(FieldValue::Float(55.0).matches(&FieldValue::Integer(55)));
        assert!(!FieldValue::Integer(2015).matches(&FieldValue::Float(2015.5)));
    }

    #[test]
    fn text_does_not_match_number() {
        assert!(!FieldValue::from("2015").matches(&FieldValue::Integer(2015)));
    }

    #[test]
    fn conversions_pick_expected_variant() {
        assert_eq!(FieldValue::from("red"), FieldValue::Text("red".to_string()));
        assert_eq!(FieldValue::from(21_000_u32), FieldValue::Integer(21_000));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
    }

    #[test]
    fn untagged_deserialization() {
        let v: FieldValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(v, FieldValue::Text("red".to_string()));
        let v: FieldValue = serde_json::from_str("2015").unwrap();
        assert_eq!(v, FieldValue::Integer(2015));
        let v: FieldValue = serde_json::from_str("55.75").unwrap();
        assert_eq!(v, FieldValue::Float(55.75));
        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(v, FieldValue::Null);
    }
}
