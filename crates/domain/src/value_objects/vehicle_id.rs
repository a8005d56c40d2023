//! Vehicle identifier value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Server-assigned vehicle identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(i64);

impl VehicleId {
    /// Wrap a raw identifier
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw identifier
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for VehicleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for VehicleId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_id_displays_raw_value() {
        assert_eq!(VehicleId::new(14).to_string(), "14");
    }

    #[test]
    fn vehicle_id_parses_from_str() {
        assert_eq!(" 7 ".parse::<VehicleId>().unwrap(), VehicleId::new(7));
        assert!("seven".parse::<VehicleId>().is_err());
    }

    #[test]
    fn vehicle_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&VehicleId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
