//! Vehicle inventory port
//!
//! Defines the interface to the remote vehicle inventory.
//! Adapters implement this port over a concrete transport (HTTP).

use async_trait::async_trait;
use domain::{VehicleId, VehicleRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Result of a successful delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The service answered `204 No Content`
    Deleted,
    /// The service answered some other success status
    Accepted(u16),
}

impl DeleteOutcome {
    /// Map a success status code to an outcome
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status == 204 {
            Self::Deleted
        } else {
            Self::Accepted(status)
        }
    }
}

/// Port for remote vehicle inventory operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VehicleInventoryPort: Send + Sync {
    /// Fetch every vehicle in the inventory
    async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, ApplicationError>;

    /// Fetch a single vehicle
    async fn get_vehicle(&self, id: VehicleId) -> Result<VehicleRecord, ApplicationError>;

    /// Create a vehicle; the service assigns the identifier
    async fn create_vehicle(
        &self,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError>;

    /// Replace the vehicle stored under `id`
    async fn update_vehicle(
        &self,
        id: VehicleId,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError>;

    /// Delete a vehicle
    async fn delete_vehicle(&self, id: VehicleId) -> Result<DeleteOutcome, ApplicationError>;

    /// Check if the inventory service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_content_means_deleted() {
        assert_eq!(DeleteOutcome::from_status(204), DeleteOutcome::Deleted);
    }

    #[test]
    fn other_success_is_accepted() {
        assert_eq!(DeleteOutcome::from_status(200), DeleteOutcome::Accepted(200));
        assert_eq!(DeleteOutcome::from_status(202), DeleteOutcome::Accepted(202));
    }
}
