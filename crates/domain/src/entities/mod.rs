//! Domain entities - Objects with identity and lifecycle

mod vehicle;

pub use vehicle::{VehiclePayload, VehicleRecord};
