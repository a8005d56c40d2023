//! Application services - Use case implementations

mod vehicle_directory;

pub use vehicle_directory::{VehicleDirectoryClient, filter_records, find_nearest};
