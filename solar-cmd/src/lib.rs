//! Command implementations for the solar CLI.
//!
//! Probes the same backend the web map talks to, through the same clients
//! and view models.

use clap::Subcommand;
use solar_core::config::ApiConfig;
use solar_core::models::Period;

pub mod probe;

#[derive(Subcommand)]
pub enum Command {
    /// Check that the backend answers on /api/test
    Health,

    /// Look up a place name
    Geocode {
        /// Place name, at least two characters
        query: String,
    },

    /// Fetch solar metrics for a coordinate inside Thailand
    Solar {
        /// Latitude, 5.0 to 21.0
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude, 97.0 to 106.0
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Which series to print
        #[arg(short, long, default_value = "daily")]
        period: Period,
    },
}

pub async fn run(command: Command, config: ApiConfig) -> anyhow::Result<()> {
    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    match command {
        Command::Health => probe::run_health(config, http).await,
        Command::Geocode { query } => probe::run_geocode(config, http, &query).await,
        Command::Solar { lat, lng, period } => probe::run_solar(config, http, lat, lng, period).await,
    }
}
