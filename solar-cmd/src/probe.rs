//! Backend probes: health, geocoding and solar data.

use log::info;
use solar_core::config::ApiConfig;
use solar_core::geocode::{GeocodingClient, SearchQuery};
use solar_core::models::{Coordinate, GeocodeResult, Period, ServiceArea, SolarSeries, THAILAND};
use solar_core::solar::SolarDataClient;
use solar_core::table::TableView;

pub async fn run_health(config: ApiConfig, http: reqwest::Client) -> anyhow::Result<()> {
    info!("Checking backend at {}", config.base_url);
    let client = SolarDataClient::with_client(config, http);
    let health = client.health().await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}

pub async fn run_geocode(config: ApiConfig, http: reqwest::Client, query: &str) -> anyhow::Result<()> {
    let Some(query) = SearchQuery::parse(query) else {
        anyhow::bail!("Search query must be at least two characters");
    };
    let client = GeocodingClient::with_client(config, http);
    let results = client.search(&query).await?;
    print!("{}", format_candidates(&results, &THAILAND));
    Ok(())
}

pub async fn run_solar(
    config: ApiConfig,
    http: reqwest::Client,
    lat: f64,
    lng: f64,
    period: Period,
) -> anyhow::Result<()> {
    let coordinate = THAILAND.validate(Coordinate::new(lat, lng))?;
    info!("Fetching {} solar data for {}", period, coordinate);
    let client = SolarDataClient::with_client(config, http);
    let series = client.fetch(coordinate).await?;
    print!("{}", format_series(&series, period));
    Ok(())
}

/// One line per candidate, marking those the map would reject.
pub fn format_candidates(results: &[GeocodeResult], area: &ServiceArea) -> String {
    if results.is_empty() {
        return "No results found.\n".to_string();
    }
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let flag = if area.contains(&r.coordinate) {
                ""
            } else {
                "  (outside service area)"
            };
            format!("{:>2}. {} [{}]{}\n", i + 1, r.display_name, r.coordinate, flag)
        })
        .collect()
}

/// Title, covered range and the period's table.
pub fn format_series(series: &SolarSeries, period: Period) -> String {
    let mut out = format!("{}\n", period.title());
    if let Some((start, end)) = series.coverage() {
        out.push_str(&format!("Data range: {} to {}\n", start, end));
    }
    out.push('\n');
    out.push_str(&TableView::render(series.samples(period), period).to_text());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_core::models::SolarSample;

    #[test]
    fn candidates_outside_thailand_are_flagged() {
        let results = vec![
            GeocodeResult {
                display_name: "Chiang Mai, Chiang Mai, Thailand".into(),
                coordinate: Coordinate::new(18.7883, 98.9853),
            },
            GeocodeResult {
                display_name: "Chiang Mai, Nebraska, United States".into(),
                coordinate: Coordinate::new(41.0, -98.0),
            },
        ];
        let text = format_candidates(&results, &THAILAND);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 1. Chiang Mai, Chiang Mai, Thailand [18.788300, 98.985300]");
        assert!(lines[1].ends_with("(outside service area)"));
    }

    #[test]
    fn no_candidates_message() {
        assert_eq!(format_candidates(&[], &THAILAND), "No results found.\n");
    }

    #[test]
    fn series_output_uses_period_table() {
        let series = SolarSeries {
            daily: vec![SolarSample {
                date: "2024-01-01".into(),
                sunlight_hours: 6.2,
                ghi: 5.1,
                pvout: 4.3,
            }],
            ..Default::default()
        };
        let daily = format_series(&series, Period::Daily);
        assert!(daily.starts_with("Daily Solar Metrics\nData range: 2024-01-01 to 2024-01-01\n"));
        assert!(daily.contains("2024-01-01  6.2"));

        let monthly = format_series(&series, Period::Monthly);
        assert!(monthly.contains("Month"));
        assert!(monthly.ends_with("No data available\n"));
    }
}
