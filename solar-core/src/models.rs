//! Data model shared by the clients, the controllers and the renderers.
//!
//! Wire structs derive `Deserialize` with the backend's field names; the
//! samples also derive `Serialize` so they can be handed to the chart bridge.

use crate::error::{Result, SolarError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WGS84 point picked on the map or returned by the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Inclusive latitude/longitude box the backend has data for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceArea {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Thailand: 5..=21 N, 97..=106 E.
pub const THAILAND: ServiceArea = ServiceArea {
    min_lat: 5.0,
    max_lat: 21.0,
    min_lng: 97.0,
    max_lng: 106.0,
};

impl ServiceArea {
    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.lat)
            && (self.min_lng..=self.max_lng).contains(&c.lng)
    }

    /// Accept `c` or reject it with a validation error.
    pub fn validate(&self, c: Coordinate) -> Result<Coordinate> {
        if self.contains(&c) {
            Ok(c)
        } else {
            Err(SolarError::Validation {
                lat: c.lat,
                lng: c.lng,
            })
        }
    }
}

/// One geocoding candidate. `display_name` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub display_name: String,
    pub coordinate: Coordinate,
}

/// One row of solar statistics for a day or a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarSample {
    /// Date label as sent by the backend ("2024-01-01", "Jan 2024").
    pub date: String,
    /// Hours of sunshine per day.
    pub sunlight_hours: f64,
    /// Global horizontal irradiance, kWh/m²/day.
    pub ghi: f64,
    /// Photovoltaic output, kWh/kWp/day.
    pub pvout: f64,
}

/// First and last date covered by a series, when the backend reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Everything returned for one coordinate. Replaced wholesale on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SolarSeries {
    #[serde(default)]
    pub daily: Vec<SolarSample>,
    #[serde(default)]
    pub monthly: Vec<SolarSample>,
    /// Decoded for completeness; the panel only offers daily and monthly.
    #[serde(default)]
    pub yearly: Vec<SolarSample>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
}

impl SolarSeries {
    /// Samples for one period, in backend order.
    pub fn samples(&self, period: Period) -> &[SolarSample] {
        match period {
            Period::Daily => &self.daily,
            Period::Monthly => &self.monthly,
        }
    }

    /// Range caption: the reported date range, else the first and last
    /// daily labels.
    pub fn coverage(&self) -> Option<(String, String)> {
        if let Some(range) = &self.date_range {
            return Some((range.start.clone(), range.end.clone()));
        }
        match (self.daily.first(), self.daily.last()) {
            (Some(first), Some(last)) => Some((first.date.clone(), last.date.clone())),
            _ => None,
        }
    }
}

/// Granularity of the displayed series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    #[default]
    Daily,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Daily, Period::Monthly];

    /// Value used in `<select>` options and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Period::Daily => "Daily Solar Metrics",
            Period::Monthly => "Monthly Solar Metrics",
        }
    }

    /// Header of the table's date column.
    pub fn date_header(&self) -> &'static str {
        match self {
            Period::Daily => "Date",
            Period::Monthly => "Month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "monthly" => Ok(Period::Monthly),
            other => Err(format!("unknown period '{}', expected daily or monthly", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_area_is_inclusive_at_the_edges() {
        for c in [
            Coordinate::new(5.0, 97.0),
            Coordinate::new(21.0, 106.0),
            Coordinate::new(13.7563, 100.5018),
        ] {
            assert!(THAILAND.contains(&c), "{} should be inside", c);
        }
    }

    #[test]
    fn service_area_rejects_outside_points() {
        for c in [
            Coordinate::new(4.999, 100.0),
            Coordinate::new(21.001, 100.0),
            Coordinate::new(13.0, 96.9),
            Coordinate::new(13.0, 106.1),
            Coordinate::new(35.6762, 139.6503),
        ] {
            let err = THAILAND.validate(c).unwrap_err();
            assert_eq!(err, SolarError::Validation { lat: c.lat, lng: c.lng });
        }
    }

    #[test]
    fn series_tolerates_missing_and_extra_fields() {
        let body = r#"{
            "coordinates": {"lat": 13.75, "lng": 100.5},
            "daily": [{"date": "2024-01-01", "sunlightHours": 6.2, "ghi": 5.1, "pvout": 4.3}]
        }"#;
        let series: SolarSeries = serde_json::from_str(body).unwrap();
        assert_eq!(series.daily.len(), 1);
        assert!(series.monthly.is_empty(), "monthly should default to empty");
        assert_eq!(series.daily[0].sunlight_hours, 6.2);
    }

    #[test]
    fn coverage_prefers_reported_range() {
        let mut series = SolarSeries {
            daily: vec![
                SolarSample {
                    date: "2024-03-30".into(),
                    sunlight_hours: 7.0,
                    ghi: 5.5,
                    pvout: 4.1,
                },
                SolarSample {
                    date: "2024-03-01".into(),
                    sunlight_hours: 6.0,
                    ghi: 5.0,
                    pvout: 3.9,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            series.coverage(),
            Some(("2024-03-30".to_string(), "2024-03-01".to_string()))
        );

        series.date_range = Some(DateRange {
            start: "2024-01-01".into(),
            end: "2024-03-30".into(),
        });
        assert_eq!(
            series.coverage(),
            Some(("2024-01-01".to_string(), "2024-03-30".to_string()))
        );

        assert_eq!(SolarSeries::default().coverage(), None);
    }

    #[test]
    fn period_parses_select_values() {
        assert_eq!("daily".parse::<Period>(), Ok(Period::Daily));
        assert_eq!(" Monthly ".parse::<Period>(), Ok(Period::Monthly));
        assert!("yearly".parse::<Period>().is_err());
        assert_eq!(Period::Monthly.date_header(), "Month");
        assert_eq!(Period::Daily.date_header(), "Date");
    }
}
