//! HTTP client for the vehicle inventory service
//!
//! Implements [`VehicleInventoryPort`] over the service's REST endpoints:
//! `GET/POST /vehicles` and `GET/PUT/DELETE /vehicles/{id}`.

use std::time::Duration;

use application::{ApplicationError, DeleteOutcome, VehicleInventoryPort};
use async_trait::async_trait;
use domain::{VehicleId, VehicleRecord};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::VehicleApiConfig;
use crate::error::VehicleApiError;

/// Vehicle inventory client over HTTP
#[derive(Debug, Clone)]
pub struct HttpVehicleClient {
    client: Client,
    config: VehicleApiConfig,
}

impl HttpVehicleClient {
    /// Create a new client with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &VehicleApiConfig) -> Result<Self, VehicleApiError> {
        config
            .validate()
            .map_err(VehicleApiError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| VehicleApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client on top of an existing `reqwest::Client`
    ///
    /// The timeout configured on `client` applies; `config.timeout_secs` is
    /// only used for error reporting.
    #[must_use]
    pub fn with_client(client: Client, config: &VehicleApiConfig) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &VehicleApiConfig {
        &self.config
    }

    /// Send a request and reject non-success statuses
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, VehicleApiError> {
        let response = request.send().await.map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VehicleApiError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(VehicleApiError::RequestFailed {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Send a request and read the body as text
    async fn send_for_body(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<String, VehicleApiError> {
        let response = self.send(request, url).await?;
        response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.timeout_error()
            } else {
                VehicleApiError::ParseError(e.to_string())
            }
        })
    }

    fn transport_error(&self, err: &reqwest::Error) -> VehicleApiError {
        if err.is_timeout() {
            self.timeout_error()
        } else {
            VehicleApiError::ConnectionFailed(err.to_string())
        }
    }

    const fn timeout_error(&self) -> VehicleApiError {
        VehicleApiError::Timeout {
            timeout_secs: self.config.timeout_secs,
        }
    }

    /// Parse a single vehicle object
    fn parse_vehicle(body: &str) -> Result<VehicleRecord, VehicleApiError> {
        let raw: Value =
            serde_json::from_str(body).map_err(|e| VehicleApiError::ParseError(e.to_string()))?;
        VehicleRecord::decode(&raw).map_err(|e| VehicleApiError::ParseError(e.to_string()))
    }

    /// Parse a JSON array of vehicle objects
    fn parse_vehicles(body: &str) -> Result<Vec<VehicleRecord>, VehicleApiError> {
        let raw: Vec<Value> =
            serde_json::from_str(body).map_err(|e| VehicleApiError::ParseError(e.to_string()))?;

        raw.iter()
            .enumerate()
            .map(|(index, item)| {
                VehicleRecord::decode(item)
                    .map_err(|e| VehicleApiError::ParseError(format!("vehicle #{index}: {e}")))
            })
            .collect()
    }
}

#[async_trait]
impl VehicleInventoryPort for HttpVehicleClient {
    #[instrument(skip(self))]
    async fn list_vehicles(&self) -> Result<Vec<VehicleRecord>, ApplicationError> {
        let url = self.config.collection_url();
        debug!(?url, "Listing vehicles");

        let body = self.send_for_body(self.client.get(&url), &url).await?;
        let vehicles = Self::parse_vehicles(&body)?;

        debug!(count = vehicles.len(), "Vehicles listed");
        Ok(vehicles)
    }

    #[instrument(skip(self))]
    async fn get_vehicle(&self, id: VehicleId) -> Result<VehicleRecord, ApplicationError> {
        let url = self.config.item_url(id);
        debug!(?url, "Fetching vehicle");

        let body = self.send_for_body(self.client.get(&url), &url).await?;
        Ok(Self::parse_vehicle(&body)?)
    }

    #[instrument(skip(self, record), fields(vehicle = %record))]
    async fn create_vehicle(
        &self,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError> {
        let url = self.config.collection_url();
        debug!(?url, "Creating vehicle");

        let request = self.client.post(&url).json(&record.encode());
        let body = self.send_for_body(request, &url).await?;
        Ok(Self::parse_vehicle(&body)?)
    }

    #[instrument(skip(self, record), fields(vehicle = %record))]
    async fn update_vehicle(
        &self,
        id: VehicleId,
        record: &VehicleRecord,
    ) -> Result<VehicleRecord, ApplicationError> {
        let url = self.config.item_url(id);
        debug!(?url, "Updating vehicle");

        let request = self.client.put(&url).json(&record.encode());
        let body = self.send_for_body(request, &url).await?;
        Ok(Self::parse_vehicle(&body)?)
    }

    #[instrument(skip(self))]
    async fn delete_vehicle(&self, id: VehicleId) -> Result<DeleteOutcome, ApplicationError> {
        let url = self.config.item_url(id);
        debug!(?url, "Deleting vehicle");

        let response = self.send(self.client.delete(&url), &url).await?;
        Ok(DeleteOutcome::from_status(response.status().as_u16()))
    }

    async fn is_available(&self) -> bool {
        let url = self.config.collection_url();
        self.client
            .get(&url)
            .send()
            .await
            .is_ok_and(|response| response.status().is_success())
    }
}
