//! Line-chart model: three metrics over a shared date axis.
//!
//! The model serializes to the JSON shape the browser chart bridge expects.

use crate::models::SolarSample;
use serde::Serialize;

/// Message shown instead of an empty chart.
pub const NO_CHART_DATA: &str = "No data available for chart visualization";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarMetric {
    SunlightHours,
    Ghi,
    Pvout,
}

impl SolarMetric {
    pub const ALL: [SolarMetric; 3] = [SolarMetric::SunlightHours, SolarMetric::Ghi, SolarMetric::Pvout];

    pub fn label(&self) -> &'static str {
        match self {
            SolarMetric::SunlightHours => "Sunlight Hours",
            SolarMetric::Ghi => "GHI",
            SolarMetric::Pvout => "PVOUT",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            SolarMetric::SunlightHours => "hours",
            SolarMetric::Ghi => "kWh/m²/day",
            SolarMetric::Pvout => "kWh/kWp/day",
        }
    }

    pub fn line_color(&self) -> &'static str {
        match self {
            SolarMetric::SunlightHours => "yellow",
            SolarMetric::Ghi => "red",
            SolarMetric::Pvout => "#4CAF50",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            SolarMetric::SunlightHours => "rgba(255, 255, 0, 0.1)",
            SolarMetric::Ghi => "rgba(255, 0, 0, 0.1)",
            SolarMetric::Pvout => "rgba(76, 175, 80, 0.1)",
        }
    }

    pub fn value(&self, sample: &SolarSample) -> f64 {
        match self {
            SolarMetric::SunlightHours => sample.sunlight_hours,
            SolarMetric::Ghi => sample.ghi,
            SolarMetric::Pvout => sample.pvout,
        }
    }

    /// Tooltip line, e.g. `GHI: 5.1 kWh/m²/day`.
    pub fn tooltip(&self, value: f64) -> String {
        format!("{}: {:.1} {}", self.label(), value, self.unit())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: &'static str,
    /// Tooltip unit suffix.
    pub unit: &'static str,
    pub data: Vec<f64>,
    pub border_color: &'static str,
    pub background_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    Chart(ChartSpec),
    Placeholder(&'static str),
}

impl ChartView {
    pub fn render(samples: &[SolarSample]) -> Self {
        if samples.is_empty() {
            return ChartView::Placeholder(NO_CHART_DATA);
        }
        let labels = samples.iter().map(|s| s.date.clone()).collect();
        let datasets = SolarMetric::ALL
            .iter()
            .map(|metric| Dataset {
                label: metric.label(),
                unit: metric.unit(),
                data: samples.iter().map(|s| metric.value(s)).collect(),
                border_color: metric.line_color(),
                background_color: metric.fill_color(),
            })
            .collect();
        ChartView::Chart(ChartSpec { labels, datasets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<SolarSample> {
        vec![
            SolarSample {
                date: "2024-01-01".into(),
                sunlight_hours: 6.2,
                ghi: 5.1,
                pvout: 4.3,
            },
            SolarSample {
                date: "2024-01-02".into(),
                sunlight_hours: 7.04,
                ghi: 5.55,
                pvout: 4.0,
            },
        ]
    }

    #[test]
    fn three_series_share_the_date_axis() {
        let spec = match ChartView::render(&samples()) {
            ChartView::Chart(spec) => spec,
            other => panic!("expected a chart, got {:?}", other),
        };
        assert_eq!(spec.labels, ["2024-01-01", "2024-01-02"]);
        let labels: Vec<&str> = spec.datasets.iter().map(|d| d.label).collect();
        assert_eq!(labels, ["Sunlight Hours", "GHI", "PVOUT"]);
        assert_eq!(spec.datasets[1].data, [5.1, 5.55]);
        for dataset in &spec.datasets {
            assert_eq!(dataset.data.len(), spec.labels.len());
        }
    }

    #[test]
    fn each_series_has_its_own_color() {
        let colors: std::collections::HashSet<&str> =
            SolarMetric::ALL.iter().map(|m| m.line_color()).collect();
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn empty_input_is_a_placeholder() {
        assert_eq!(ChartView::render(&[]), ChartView::Placeholder(NO_CHART_DATA));
    }

    #[test]
    fn tooltip_has_one_decimal_and_unit() {
        assert_eq!(SolarMetric::SunlightHours.tooltip(7.04), "Sunlight Hours: 7.0 hours");
        assert_eq!(SolarMetric::Ghi.tooltip(5.1), "GHI: 5.1 kWh/m²/day");
        assert_eq!(SolarMetric::Pvout.tooltip(4.0), "PVOUT: 4.0 kWh/kWp/day");
    }

    #[test]
    fn serializes_in_chart_bridge_shape() {
        let spec = match ChartView::render(&samples()[..1]) {
            ChartView::Chart(spec) => spec,
            other => panic!("expected a chart, got {:?}", other),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["labels"][0], "2024-01-01");
        assert_eq!(json["datasets"][2]["borderColor"], "#4CAF50");
        assert_eq!(json["datasets"][0]["unit"], "hours");
        assert_eq!(json["datasets"][0]["backgroundColor"], "rgba(255, 255, 0, 0.1)");
    }
}
