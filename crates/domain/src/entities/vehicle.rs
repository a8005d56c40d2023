//! Vehicle record entity
//!
//! A vehicle as exchanged with the remote inventory service. Records are
//! immutable once built; the `with_*` methods return a modified copy.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DecodeError;
use crate::value_objects::{FieldValue, GeoLocation, VehicleField, VehicleId};

/// A single vehicle in the inventory
///
/// Equality compares every attribute except the identifier, so a record
/// before and after persistence compares equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VehiclePayload", into = "VehiclePayload")]
pub struct VehicleRecord {
    id: Option<VehicleId>,
    name: String,
    model: String,
    year: i32,
    color: String,
    price: u32,
    location: GeoLocation,
}

/// Wire representation of a vehicle record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePayload {
    /// Identifier, `null` for records not yet persisted
    #[serde(default)]
    pub id: Option<VehicleId>,
    /// Vehicle name (make)
    pub name: String,
    /// Vehicle model
    pub model: String,
    /// Production year
    pub year: i32,
    /// Paint color
    pub color: String,
    /// Price in whole currency units
    pub price: u32,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl VehicleRecord {
    /// Create a record that has not been persisted yet
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        color: impl Into<String>,
        price: u32,
        location: GeoLocation,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            model: model.into(),
            year,
            color: color.into(),
            price,
            location,
        }
    }

    /// Decode a record from an untyped mapping (e.g. parsed JSON)
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::Malformed` if a required field is missing or has
    /// the wrong type, and `DecodeError::InvalidCoordinates` if the position
    /// is out of range.
    pub fn decode(raw: &Value) -> Result<Self, DecodeError> {
        let payload = VehiclePayload::deserialize(raw)?;
        Self::try_from(payload)
    }

    /// Encode the record as an untyped mapping suitable for a request body
    ///
    /// The `id` key is always present and is `null` when unassigned.
    #[must_use]
    pub fn encode(&self) -> Value {
        let payload = VehiclePayload::from(self.clone());
        serde_json::json!({
            "id": payload.id,
            "name": payload.name,
            "model": payload.model,
            "year": payload.year,
            "color": payload.color,
            "price": payload.price,
            "latitude": payload.latitude,
            "longitude": payload.longitude,
        })
    }

    /// Same record with the given identifier
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Same record with a different color
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Same record with a different price
    #[must_use]
    pub fn with_price(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Same record at a different position
    #[must_use]
    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub const fn id(&self) -> Option<VehicleId> {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    /// Position of the vehicle
    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Great-circle distance to another vehicle in meters
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.location.distance_m(&other.location)
    }

    /// Value of a single field
    #[must_use]
    pub fn field_value(&self, field: VehicleField) -> FieldValue {
        match field {
            VehicleField::Id => self.id.map(|id| id.get()).into(),
            VehicleField::Name => self.name.as_str().into(),
            VehicleField::Model => self.model.as_str().into(),
            VehicleField::Year => self.year.into(),
            VehicleField::Color => self.color.as_str().into(),
            VehicleField::Price => self.price.into(),
            VehicleField::Latitude => self.latitude().into(),
            VehicleField::Longitude => self.longitude().into(),
        }
    }
}

impl PartialEq for VehicleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.model == other.model
            && self.year == other.year
            && self.color == other.color
            && self.price == other.price
            && self.location == other.location
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Vehicle: {} {} {} {} {}>",
            self.name, self.model, self.year, self.color, self.price
        )
    }
}

impl TryFrom<VehiclePayload> for VehicleRecord {
    type Error = DecodeError;

    fn try_from(payload: VehiclePayload) -> Result<Self, Self::Error> {
        let location = GeoLocation::new(payload.latitude, payload.longitude)
            .map_err(DecodeError::InvalidCoordinates)?;

        Ok(Self {
            id: payload.id,
            name: payload.name,
            model: payload.model,
            year: payload.year,
            color: payload.color,
            price: payload.price,
            location,
        })
    }
}

impl From<VehicleRecord> for VehiclePayload {
    fn from(record: VehicleRecord) -> Self {
        Self {
            id: record.id,
            latitude: record.location.latitude(),
            longitude: record.location.longitude(),
            name: record.name,
            model: record.model,
            year: record.year,
            color: record.color,
            price: record.price,
        }
    }
}
