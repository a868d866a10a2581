//! Per-coordinate solar statistics from `GET /api/solar-data?lat=..&lng=..`.
//!
//! A single attempt per call; failures go straight back to the caller.

use crate::config::ApiConfig;
use crate::error::{Result, SolarError};
use crate::geocode::ErrorBody;
use crate::models::{Coordinate, SolarSeries};
use log::debug;
use serde::Deserialize;

/// Fallback message when a failure payload carries no `error` field.
const GENERIC_FETCH_FAILURE: &str = "Failed to fetch solar data";

/// Decode a solar-data response given its HTTP status and body.
pub fn decode_solar_response(status: u16, body: &str) -> Result<SolarSeries> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    Err(match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message) }) => SolarError::Api(message),
        Ok(ErrorBody { error: None }) => SolarError::Api(GENERIC_FETCH_FAILURE.to_string()),
        Err(_) => SolarError::Network(format!("solar data request failed with HTTP {}", status)),
    })
}

/// Reply of the backend's `GET /api/test` liveness endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Client for the backend's solar-data endpoint.
#[derive(Debug, Clone)]
pub struct SolarDataClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl SolarDataClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, headers).
    pub fn with_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub async fn fetch(&self, coordinate: Coordinate) -> Result<SolarSeries> {
        let url = self.config.endpoint("/api/solar-data");
        debug!("Fetching solar data for {} via {}", coordinate, url);
        let response = self
            .http
            .get(&url)
            .query(&[("lat", coordinate.lat), ("lng", coordinate.lng)])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_solar_response(status, &body)
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.http.get(self.config.endpoint("/api/test")).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        if !(200..300).contains(&status) {
            return Err(SolarError::Network(format!("health check failed with HTTP {}", status)));
        }
        Ok(serde_json::from_str(&body)?)
    }
}
