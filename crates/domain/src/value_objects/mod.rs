//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod vehicle_field;
mod vehicle_id;

pub use geo_location::{EARTH_RADIUS_M, GeoLocation, InvalidCoordinates};
pub use vehicle_field::{FieldValue, VehicleField};
pub use vehicle_id::VehicleId;
