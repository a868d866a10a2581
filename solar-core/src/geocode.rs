//! Place-name search against `GET /api/geocode?query=...`.

use crate::config::{ApiConfig, MIN_QUERY_CHARS};
use crate::error::{Result, SolarError};
use crate::models::{Coordinate, GeocodeResult};
use log::{debug, warn};
use serde::Deserialize;

/// A trimmed search string long enough to be sent to the geocoder.
///
/// Construction is the only place the minimum-length rule is checked, so a
/// `SearchQuery` in hand is always safe to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// `None` when the trimmed input is shorter than [`MIN_QUERY_CHARS`].
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<WireGeocodeResult>,
}

#[derive(Deserialize)]
struct WireGeocodeResult {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}

/// Decode a geocode response given its HTTP status and body.
///
/// Candidates without coordinates are dropped. An empty `Vec` means no match.
/// Any non-2xx status is a network error; the backend's message, if any, is
/// kept in it.
pub fn decode_geocode_response(status: u16, body: &str) -> Result<Vec<GeocodeResult>> {
    if !(200..300).contains(&status) {
        return Err(SolarError::Network(match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: Some(message) }) => {
                format!("geocoding request failed with HTTP {}: {}", status, message)
            }
            _ => format!("geocoding request failed with HTTP {}", status),
        }));
    }

    let response: GeocodeResponse = serde_json::from_str(body)?;
    let results = response
        .results
        .into_iter()
        .filter_map(|wire| {
            let display_name = wire
                .display_name
                .filter(|n| !n.is_empty())
                .or(wire.name)
                .unwrap_or_default();
            match (wire.lat, wire.lng) {
                (Some(lat), Some(lng)) => Some(GeocodeResult {
                    display_name,
                    coordinate: Coordinate::new(lat, lng),
                }),
                _ => {
                    warn!("Skipping geocode result without coordinates: {}", display_name);
                    None
                }
            }
        })
        .collect();
    Ok(results)
}

/// Client for the backend's geocoding endpoint.
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl GeocodingClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured HTTP client (timeouts, headers).
    pub fn with_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Candidates for `query`, in backend order (first is the best match).
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<GeocodeResult>> {
        let url = self.config.endpoint("/api/geocode");
        debug!("Geocoding '{}' via {}", query.as_str(), url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query.as_str())])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_geocode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_are_never_built() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse("  B  "), None);
        assert_eq!(SearchQuery::parse("ก"), None);
        assert_eq!(SearchQuery::parse(" Bangkok ").unwrap().as_str(), "Bangkok");
        assert!(SearchQuery::parse("กร").is_some(), "two Thai characters are enough");
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let body = r#"{"results": [
            {"display_name": "Chiang Mai, Chiang Mai, Thailand", "name": "Chiang Mai", "lat": 18.79, "lng": 98.98},
            {"name": "Phuket", "lat": 7.89, "lng": 98.39},
            {"display_name": "", "name": "Krabi", "lat": 8.08, "lng": 98.91}
        ]}"#;
        let results = decode_geocode_response(200, body).unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, ["Chiang Mai, Chiang Mai, Thailand", "Phuket", "Krabi"]);
        assert_eq!(results[0].coordinate, Coordinate::new(18.79, 98.98));
    }

    #[test]
    fn zero_matches_is_an_empty_list() {
        assert!(decode_geocode_response(200, r#"{"results": []}"#).unwrap().is_empty());
        assert!(decode_geocode_response(200, "{}").unwrap().is_empty());
    }

    #[test]
    fn results_without_coordinates_are_dropped() {
        let body = r#"{"results": [{"name": "Nowhere", "lat": null, "lng": 100.0}]}"#;
        assert!(decode_geocode_response(200, body).unwrap().is_empty());
    }

    #[test]
    fn failure_status_is_always_a_network_error() {
        let err = decode_geocode_response(400, r#"{"error": "Search query is required"}"#).unwrap_err();
        assert_eq!(
            err,
            SolarError::Network("geocoding request failed with HTTP 400: Search query is required".to_string())
        );

        let err = decode_geocode_response(500, r#"{"error": "Failed to search for location: boom"}"#)
            .unwrap_err();
        assert!(matches!(err, SolarError::Network(ref m) if m.ends_with("boom")), "got {:?}", err);

        let err = decode_geocode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SolarError::Network(_)), "got {:?}", err);
    }

    #[test]
    fn malformed_success_body_is_a_decode_error() {
        let err = decode_geocode_response(200, "not json").unwrap_err();
        assert!(matches!(err, SolarError::Decode(_)));
    }
}
