//! Vehicle inventory integration
//!
//! HTTP adapter for the remote vehicle inventory service. [`HttpVehicleClient`]
//! implements the application's `VehicleInventoryPort` using `reqwest`, mapping
//! the service's JSON representation to [`domain::VehicleRecord`].
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use application::VehicleDirectoryClient;
//! use integration_vehicles::{HttpVehicleClient, VehicleApiConfig};
//!
//! let config = VehicleApiConfig::new("https://inventory.example.org");
//! let inventory = HttpVehicleClient::new(&config)?;
//! let directory = VehicleDirectoryClient::with_tracing(Arc::new(inventory));
//!
//! let nearest = directory.nearest_vehicle(1.into()).await;
//! ```

mod client;
mod config;
mod error;

pub use client::HttpVehicleClient;
pub use config::VehicleApiConfig;
pub use error::VehicleApiError;
