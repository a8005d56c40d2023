//! Vehicle directory CLI
//!
//! Command-line front end for a remote vehicle inventory service.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;
mod commands;
mod config;
mod telemetry;

use std::{process::ExitCode, sync::Arc};

use application::VehicleDirectoryClient;
use clap::Parser;
use integration_vehicles::HttpVehicleClient;
use tracing::debug;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Exit status for rejected input (unknown filter field, bad coordinates)
const INVALID_INPUT_EXIT_CODE: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.base_url, cli.timeout_secs);

    let filter = telemetry::resolve_filter(cli.verbose, &config.telemetry);
    telemetry::init_tracing(&filter, config.telemetry.log_format)?;

    debug!(
        base_url = %config.vehicles.base_url,
        timeout_secs = config.vehicles.timeout_secs,
        "Configuration loaded"
    );

    let inventory = HttpVehicleClient::new(&config.vehicles)?;
    let directory = VehicleDirectoryClient::with_tracing(Arc::new(inventory));

    let output = match commands::run(&directory, cli.command).await {
        Ok(output) => output,
        Err(err) if commands::is_invalid_input(&err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::from(INVALID_INPUT_EXIT_CODE));
        },
        Err(err) => return Err(err),
    };
    println!("{}", output.text);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
