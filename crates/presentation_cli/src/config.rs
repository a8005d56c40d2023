//! CLI configuration
//!
//! Values are layered: built-in defaults, then an optional configuration
//! file, then environment variables such as
//! `VEHICLE_DIRECTORY_VEHICLES__BASE_URL` or
//! `VEHICLE_DIRECTORY_TELEMETRY__LOG_FORMAT`.

use std::path::Path;

use integration_vehicles::VehicleApiConfig;
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "VEHICLE_DIRECTORY";

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive; the `-v` flag takes precedence when given
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Log line format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Complete CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inventory service connection
    #[serde(default)]
    pub vehicles: VehicleApiConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// Without an explicit path, `config.{toml,yaml,json}` in the working
    /// directory is read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, a source
    /// cannot be parsed, or a value has the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Apply command-line overrides
    pub fn apply_overrides(&mut self, base_url: Option<String>, timeout_secs: Option<u64>) {
        if let Some(base_url) = base_url {
            self.vehicles.base_url = base_url;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.vehicles.timeout_secs = timeout_secs;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.vehicles.base_url, "http://localhost:8000");
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
        assert!(config.telemetry.log_filter.is_none());
    }

    #[test]
    fn load_toml_file() {
        let file = write_config(
            ".toml",
            r#"
[vehicles]
base_url = "https://inventory.example.org/api"
timeout_secs = 3

[telemetry]
log_filter = "debug"
log_format = "json"
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.vehicles.base_url, "https://inventory.example.org/api");
        assert_eq!(config.vehicles.timeout_secs, 3);
        assert_eq!(config.telemetry.log_filter.as_deref(), Some("debug"));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(
            ".toml",
            r#"
[vehicles]
timeout_secs = 30
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.vehicles.base_url, "http://localhost:8000");
        assert_eq!(config.vehicles.timeout_secs, 30);
        assert!(config.vehicles.user_agent.starts_with("vehicle-directory/"));
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn load_json_file() {
        let file = write_config(".json", r#"{ "vehicles": { "base_url": "http://10.0.0.5:8000" } }"#);

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.vehicles.base_url, "http://10.0.0.5:8000");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn wrong_type_is_an_error() {
        let file = write_config(
            ".toml",
            r#"
[vehicles]
timeout_secs = "soon"
"#,
        );
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        let file = write_config(
            ".toml",
            r#"
[telemetry]
log_format = "xml"
"#,
        );
        assert!(AppConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("http://override:1234".to_string()), Some(2));
        assert_eq!(config.vehicles.base_url, "http://override:1234");
        assert_eq!(config.vehicles.timeout_secs, 2);
    }

    #[test]
    fn absent_overrides_keep_loaded_values() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, None);
        assert_eq!(config.vehicles.base_url, "http://localhost:8000");
        assert_eq!(config.vehicles.timeout_secs, 10);
    }
}
