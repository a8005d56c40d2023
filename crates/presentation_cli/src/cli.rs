//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use domain::{DomainError, FieldValue, GeoLocation, VehicleId, VehicleRecord};

/// Vehicle directory CLI
#[derive(Debug, Parser)]
#[command(name = "vehicle-directory")]
#[command(author, version, about = "Query and manage a remote vehicle inventory", long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a configuration file (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the inventory service
    #[arg(long, env = "VEHICLE_DIRECTORY_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every vehicle
    List,

    /// Show a single vehicle
    Get {
        /// Vehicle identifier
        id: VehicleId,
    },

    /// List vehicles matching every `field=value` criterion
    ///
    /// Example: vehicle-directory filter --where color=red --where year=2021
    Filter {
        /// Criterion as `field=value`; may be repeated
        #[arg(short = 'w', long = "where", value_parser = parse_criterion)]
        criteria: Vec<(String, FieldValue)>,
    },

    /// Create a vehicle
    Add(VehicleArgs),

    /// Replace every field of an existing vehicle
    Update {
        /// Vehicle identifier
        id: VehicleId,

        #[command(flatten)]
        vehicle: VehicleArgs,
    },

    /// Delete a vehicle
    Delete {
        /// Vehicle identifier
        id: VehicleId,
    },

    /// Great-circle distance in meters between two vehicles
    Distance {
        /// First vehicle identifier
        first: VehicleId,

        /// Second vehicle identifier
        second: VehicleId,
    },

    /// Closest other vehicle to the given one
    Nearest {
        /// Vehicle identifier
        id: VehicleId,
    },

    /// Check whether the inventory service is reachable
    Health,
}

/// Vehicle attributes shared by `add` and `update`
#[derive(Debug, Clone, Args)]
pub struct VehicleArgs {
    /// Vehicle name (make)
    #[arg(long)]
    pub name: String,

    /// Vehicle model
    #[arg(long)]
    pub model: String,

    /// Production year
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// Color
    #[arg(long)]
    pub color: String,

    /// Price
    #[arg(long)]
    pub price: u32,

    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub longitude: f64,
}

impl VehicleArgs {
    /// Build an unsaved record from the arguments
    pub fn to_record(&self) -> Result<VehicleRecord, DomainError> {
        let location = GeoLocation::new(self.latitude, self.longitude)?;
        Ok(VehicleRecord::new(
            self.name.clone(),
            self.model.clone(),
            self.year,
            self.color.clone(),
            self.price,
            location,
        ))
    }
}

/// Parse a `field=value` filter criterion
///
/// The field name is kept as given and validated by the directory. The value
/// is read as an integer, then a float, then `null`, and falls back to text.
pub fn parse_criterion(raw: &str) -> Result<(String, FieldValue), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{raw}'"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }

    Ok((field.to_string(), parse_field_value(value.trim())))
}

/// Interpret a textual filter value
pub fn parse_field_value(raw: &str) -> FieldValue {
    if let Ok(int) = raw.parse::<i64>() {
        return FieldValue::Integer(int);
    }
    if let Some(float) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return FieldValue::Float(float);
    }
    if raw == "null" {
        return FieldValue::Null;
    }
    FieldValue::Text(raw.to_string())
}
