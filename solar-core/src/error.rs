//! Error types for solar data and geocoding operations.

use thiserror::Error;

/// Errors surfaced by the clients and the selection controller.
///
/// Zero geocoding matches are not an error: the geocoder returns an empty
/// `Vec` instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolarError {
    /// Transport failure, timeout, or a non-success status without a
    /// structured error payload.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with `{ "error": message }`.
    #[error("{0}")]
    Api(String),

    /// The coordinate lies outside the supported service area.
    #[error("Coordinates out of range.")]
    Validation { lat: f64, lng: f64 },

    /// A success response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SolarError {
    fn from(err: reqwest::Error) -> Self {
        SolarError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SolarError {
    fn from(err: serde_json::Error) -> Self {
        SolarError::Decode(err.to_string())
    }
}

/// Type alias for Results using SolarError
pub type Result<T> = std::result::Result<T, SolarError>;
