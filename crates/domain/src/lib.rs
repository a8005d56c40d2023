//! Domain layer for the vehicle directory
//!
//! Contains the vehicle record entity, geographic value objects, and domain
//! errors. This layer performs no I/O and defines the shared vocabulary.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DecodeError, DomainError};
pub use value_objects::*;
