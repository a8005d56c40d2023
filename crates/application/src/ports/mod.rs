//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters implement these ports.

mod diagnostics_port;
mod vehicle_inventory_port;

#[cfg(test)]
pub use diagnostics_port::MockDiagnosticsPort;
pub use diagnostics_port::{
    BufferedDiagnostics, DiagnosticEntry, DiagnosticsPort, Severity, TracingDiagnostics,
};
#[cfg(test)]
pub use vehicle_inventory_port::MockVehicleInventoryPort;
pub use vehicle_inventory_port::{DeleteOutcome, VehicleInventoryPort};
