//! Backend location and the fixed interaction constants of the map UI.

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Lifetime of a transient notice banner, in milliseconds.
pub const NOTICE_LIFETIME_MS: u32 = 3000;

/// Quiet period before a search-as-you-type query is sent, in milliseconds.
pub const SUGGESTION_DEBOUNCE_MS: u32 = 300;

/// Delay before the map and chart are re-fit after a panel transition.
pub const LAYOUT_SETTLE_MS: u32 = 300;

/// Shortest query (in characters, after trimming) that may reach the geocoder.
pub const MIN_QUERY_CHARS: usize = 2;

/// Initial map center (Bangkok) and zoom.
pub const INITIAL_CENTER: (f64, f64) = (13.7563, 100.5018);
pub const INITIAL_ZOOM: u8 = 6;

/// Zoom applied when the map re-centers on a search result.
pub const SEARCH_RESULT_ZOOM: u8 = 10;

/// Where the HTTP clients send their requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config, dropping any trailing `/` from the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Config for the web build: `SOLAR_API_BASE_URL` at compile time, or the default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SOLAR_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join an endpoint path such as `/api/geocode` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("https://solar.example.org/");
        assert_eq!(config.base_url, "https://solar.example.org");
        assert_eq!(
            config.endpoint("/api/solar-data"),
            "https://solar.example.org/api/solar-data"
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().endpoint("api/test"), "http://localhost:5000/api/test");
    }
}
