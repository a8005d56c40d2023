//! Command execution
//!
//! Each command maps onto one directory operation. The result is rendered
//! to a string so `main` decides where it goes.

use std::collections::HashMap;

use application::{ApplicationError, VehicleDirectoryClient};
use domain::{FieldValue, VehicleRecord};

use crate::cli::Commands;

/// Rendered result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout
    pub text: String,
    /// Whether the operation produced a result
    pub success: bool,
}

impl CommandOutput {
    fn found(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn missing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Execute a command against the directory
///
/// # Errors
///
/// Returns an error for invalid input (unknown filter field, coordinates
/// out of range) or when a record cannot be rendered.
pub async fn run(
    directory: &VehicleDirectoryClient,
    command: Commands,
) -> anyhow::Result<CommandOutput> {
    let output = match command {
        Commands::List => CommandOutput::found(render_records(&directory.list_vehicles().await)?),

        Commands::Get { id } => match directory.get_vehicle(id).await {
            Some(vehicle) => CommandOutput::found(render_record(&vehicle)?),
            None => CommandOutput::missing(format!("Vehicle {id} not found")),
        },

        Commands::Filter { criteria } => {
            let criteria: HashMap<String, FieldValue> = criteria.into_iter().collect();
            let vehicles = directory.filter_vehicles(&criteria).await?;
            CommandOutput::found(render_records(&vehicles)?)
        },

        Commands::Add(args) => {
            let record = args.to_record().map_err(ApplicationError::from)?;
            match directory.add_vehicle(&record).await {
                Some(created) => CommandOutput::found(render_record(&created)?),
                None => CommandOutput::missing("Vehicle was not created"),
            }
        },

        Commands::Update { id, vehicle } => {
            let record = vehicle
                .to_record()
                .map_err(ApplicationError::from)?
                .with_id(id);
            match directory.update_vehicle(&record).await? {
                Some(updated) => CommandOutput::found(render_record(&updated)?),
                None => CommandOutput::missing(format!("Vehicle {id} was not updated")),
            }
        },

        Commands::Delete { id } => {
            if directory.delete_vehicle(id).await {
                CommandOutput::found(format!("Vehicle {id} deleted"))
            } else {
                CommandOutput::missing(format!("Vehicle {id} was not deleted"))
            }
        },

        Commands::Distance { first, second } => {
            match directory.distance_between(first, second).await {
                Some(meters) => CommandOutput::found(format!("{meters:.1} m")),
                None => CommandOutput::missing(format!(
                    "Distance between {first} and {second} is unavailable"
                )),
            }
        },

        Commands::Nearest { id } => match directory.nearest_vehicle(id).await {
            Some(vehicle) => CommandOutput::found(render_record(&vehicle)?),
            None => CommandOutput::missing(format!("No vehicle near {id}")),
        },

        Commands::Health => {
            if directory.is_available().await {
                CommandOutput::found("Inventory service is reachable".to_string())
            } else {
                CommandOutput::missing("Inventory service is unreachable")
            }
        },
    };

    Ok(output)
}

/// Whether a command failed because of the caller's input
pub fn is_invalid_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApplicationError>()
        .is_some_and(ApplicationError::is_invalid_input)
}

fn render_record(record: &VehicleRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

fn render_records(records: &[VehicleRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
