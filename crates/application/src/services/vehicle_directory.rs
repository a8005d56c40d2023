//! Vehicle directory service
//!
//! Facade over the remote inventory. The `try_*` operations return typed
//! errors; the plain operations log failures through the injected
//! diagnostics sink and degrade to an empty list, `None`, or `false`.

use std::{collections::HashMap, fmt, sync::Arc};

use domain::{FieldValue, VehicleField, VehicleId, VehicleRecord};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{DeleteOutcome, DiagnosticsPort, Severity, TracingDiagnostics, VehicleInventoryPort},
};

/// Client for listing, editing, and locating vehicles
pub struct VehicleDirectoryClient {
    inventory: Arc<dyn VehicleInventoryPort>,
    diagnostics: Arc<dyn DiagnosticsPort>,
}

impl fmt::Debug for VehicleDirectoryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehicleDirectoryClient").finish_non_exhaustive()
    }
}

impl VehicleDirectoryClient {
    /// Create a new directory client
    pub fn new(
        inventory: Arc<dyn VehicleInventoryPort>,
        diagnostics: Arc<dyn DiagnosticsPort>,
    ) -> Self {
        Self {
            inventory,
            diagnostics,
        }
    }

    /// Create a directory client that reports through `tracing`
    pub fn with_tracing(inventory: Arc<dyn VehicleInventoryPort>) -> Self {
        Self::new(inventory, Arc::new(TracingDiagnostics))
    }

    /// Check if the inventory service is reachable
    pub async fn is_available(&self) -> bool {
        self.inventory.is_available().await
    }

    // --- Typed operations ---

    /// Fetch every vehicle
    #[instrument(skip(self))]
    pub async fn try_list_vehicles(&self) -> Result<Vec<VehicleRecord>, ApplicationError> {
        self.inventory.list_vehicles().await
    }

    /// Fetch a single vehicle
    #[instrument(skip(self))]
    pub async fn try_get_vehicle(&self, id: VehicleId) -> Result<VehicleRecord, ApplicationError> {
        self.inventory.get_vehicle(id).await
    }

    /// Create a vehicle and return the stored record
    #[instrument(skip(self, record), fields(vehicle = %record))]
    pub async fn try_add_vehicle(
        &self,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError> {
        self.inventory.create_vehicle(record).await
    }

    /// Replace a stored vehicle
    ///
    /// Fails with `MissingIdentifier` before contacting the service if the
    /// record has no id.
    #[instrument(skip(self, record), fields(vehicle = %record))]
    pub async fn try_update_vehicle(
        &self,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError> {
        let id = record.id().ok_or(ApplicationError::MissingIdentifier)?;
        self.inventory.update_vehicle(id, record).await
    }

    /// Delete a vehicle
    #[instrument(skip(self))]
    pub async fn try_delete_vehicle(&self, id: VehicleId) -> Result<DeleteOutcome, ApplicationError> {
        self.inventory.delete_vehicle(id).await
    }

    /// Great-circle distance between two vehicles in meters
    #[instrument(skip(self))]
    pub async fn try_distance_between(
        &self,
        id1: VehicleId,
        id2: VehicleId,
    ) -> Result<f64, ApplicationError> {
        let first = self.inventory.get_vehicle(id1).await?;
        let second = self.inventory.get_vehicle(id2).await?;
        Ok(first.distance_to(&second))
    }

    /// Closest other vehicle to `id`, or `None` if `id` is not listed or
    /// has no neighbours
    #[instrument(skip(self))]
    pub async fn try_nearest_vehicle(
        &self,
        id: VehicleId,
    ) -> Result<Option<VehicleRecord>, ApplicationError> {
        let vehicles = self.inventory.list_vehicles().await?;
        Ok(find_nearest(id, &vehicles).cloned())
    }

    // --- Degrading operations ---

    /// Fetch every vehicle; empty on failure
    pub async fn list_vehicles(&self) -> Vec<VehicleRecord> {
        match self.try_list_vehicles().await {
            Ok(vehicles) => {
                debug!(count = vehicles.len(), "Vehicles fetched");
                vehicles
            },
            Err(e) => {
                self.report(&format!("An error occurred while fetching vehicles: {e}"));
                Vec::new()
            },
        }
    }

    /// Fetch a single vehicle; `None` on failure
    pub async fn get_vehicle(&self, id: VehicleId) -> Option<VehicleRecord> {
        self.try_get_vehicle(id)
            .await
            .map_err(|e| {
                self.report(&format!(
                    "An error occurred while fetching vehicle with id {id}: {e}"
                ));
            })
            .ok()
    }

    /// Vehicles whose fields equal every given criterion, in list order
    ///
    /// Criteria names are validated before the inventory is contacted.
    /// An empty criteria map returns the full list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilterField` if a criterion names an unknown field.
    pub async fn filter_vehicles<K>(
        &self,
        criteria: &HashMap<K, FieldValue>,
    ) -> Result<Vec<VehicleRecord>, ApplicationError>
    where
        K: AsRef<str> + Sync,
    {
        let criteria = parse_criteria(criteria)?;
        let vehicles = self.list_vehicles().await;
        Ok(filter_records(vehicles, &criteria))
    }

    /// Create a vehicle; `None` on failure
    pub async fn add_vehicle(&self, record: &VehicleRecord) -> Option<VehicleRecord> {
        self.try_add_vehicle(record)
            .await
            .map_err(|e| self.report(&format!("An error occurred while adding vehicle: {e}")))
            .ok()
    }

    /// Replace a stored vehicle; `Ok(None)` on remote failure
    ///
    /// # Errors
    ///
    /// Returns `MissingIdentifier` if the record has no id. No request is
    /// made in that case.
    pub async fn update_vehicle(
        &self,
        record: &VehicleRecord,
    ) -> Result<Option<VehicleRecord>, ApplicationError> {
        match self.try_update_vehicle(record).await {
            Ok(updated) => Ok(Some(updated)),
            Err(e) => {
                self.report(&format!("An error occurred while updating vehicle: {e}"));
                if matches!(e, ApplicationError::MissingIdentifier) {
                    Err(e)
                } else {
                    Ok(None)
                }
            },
        }
    }

    /// Delete a vehicle; `true` only if the service answered 204
    pub async fn delete_vehicle(&self, id: VehicleId) -> bool {
        match self.try_delete_vehicle(id).await {
            Ok(DeleteOutcome::Deleted) => true,
            Ok(DeleteOutcome::Accepted(status)) => {
                self.report(&format!(
                    "Unexpected status {status} while deleting vehicle with id {id}"
                ));
                false
            },
            Err(e) => {
                self.report(&format!(
                    "An error occurred while deleting vehicle with id {id}: {e}"
                ));
                false
            },
        }
    }

    /// Distance in meters between two vehicles; `None` if either is unavailable
    ///
    /// Both vehicles are always fetched, so each missing one is logged.
    pub async fn distance_between(&self, id1: VehicleId, id2: VehicleId) -> Option<f64> {
        let first = self.get_vehicle(id1).await;
        let second = self.get_vehicle(id2).await;
        Some(first?.distance_to(&second?))
    }

    /// Closest other vehicle to `id`; `None` if not found or on failure
    pub async fn nearest_vehicle(&self, id: VehicleId) -> Option<VehicleRecord> {
        let vehicles = self.list_vehicles().await;
        find_nearest(id, &vehicles).cloned()
    }

    fn report(&self, message: &str) {
        self.diagnostics.log(Severity::Error, message);
    }
}

/// Resolve criterion names to fields
fn parse_criteria<K: AsRef<str>>(
    criteria: &HashMap<K, FieldValue>,
) -> Result<Vec<(VehicleField, FieldValue)>, ApplicationError> {
    criteria
        .iter()
        .map(|(name, value)| {
            let name = name.as_ref();
            name.parse::<VehicleField>()
                .map(|field| (field, value.clone()))
                .map_err(|_| ApplicationError::InvalidFilterField(name.to_string()))
        })
        .collect()
}

/// Keep records matching every criterion, preserving order
#[must_use]
pub fn filter_records(
    vehicles: Vec<VehicleRecord>,
    criteria: &[(VehicleField, FieldValue)],
) -> Vec<VehicleRecord> {
    vehicles
        .into_iter()
        .filter(|vehicle| {
            criteria
                .iter()
                .all(|(field, expected)| vehicle.field_value(*field).matches(expected))
        })
        .collect()
}

/// Closest vehicle to the one with `target` id, excluding the target itself
///
/// Ties resolve to the first candidate in list order.
#[must_use]
pub fn find_nearest(target: VehicleId, vehicles: &[VehicleRecord]) -> Option<&VehicleRecord> {
    let index = vehicles.iter().position(|v| v.id() == Some(target))?;
    let origin = &vehicles[index];

    vehicles
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, candidate)| (candidate, origin.distance_to(candidate)))
        .fold(None, |best: Option<(&VehicleRecord, f64)>, (candidate, distance)| {
            match best {
                Some((_, best_distance)) if best_distance <= distance => best,
                _ => Some((candidate, distance)),
            }
        })
        .map(|(nearest, _)| nearest)
}
