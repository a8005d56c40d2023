//! Vehicle inventory service configuration

use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the remote vehicle inventory service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleApiConfig {
    /// Base URL of the inventory service (without the `/vehicles` suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("vehicle-directory/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for VehicleApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl VehicleApiConfig {
    /// Create a configuration pointing at `base_url` with default settings
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Collection endpoint, e.g. `http://host/vehicles`
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}/vehicles", self.base_url.trim_end_matches('/'))
    }

    /// Item endpoint, e.g. `http://host/vehicles/14`
    #[must_use]
    pub fn item_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{id}", self.collection_url())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("base_url is not a valid URL: {e}"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "base_url must use http or https, got {}",
                url.scheme()
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VehicleApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("vehicle-directory/"));
    }

    #[test]
    fn test_testing_config() {
        let config = VehicleApiConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_endpoints() {
        let config = VehicleApiConfig::new("https://test.example.org/test-task");
        assert_eq!(
            config.collection_url(),
            "https://test.example.org/test-task/vehicles"
        );
        assert_eq!(
            config.item_url(14),
            "https://test.example.org/test-task/vehicles/14"
        );
    }

    #[test]
    fn test_endpoints_trim_trailing_slash() {
        let config = VehicleApiConfig::new("http://localhost:8000/");
        assert_eq!(config.collection_url(), "http://localhost:8000/vehicles");
    }

    #[test]
    fn test_validation_success() {
        assert!(VehicleApiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = VehicleApiConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_scheme() {
        let config = VehicleApiConfig::new("ftp://example.org");
        let err = config.validate().unwrap_err();
        assert!(err.contains("ftp"));
    }

    #[test]
    fn test_validation_unparseable_url() {
        assert!(VehicleApiConfig::new("not a url").validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = VehicleApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: VehicleApiConfig =
            serde_json::from_str(r#"{ "base_url": "http://inventory:9000" }"#).unwrap();
        assert_eq!(config.base_url, "http://inventory:9000");
        assert_eq!(config.timeout_secs, 10);
    }
}
