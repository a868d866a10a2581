//! Tabular view of a sample sequence.
//!
//! The view is rebuilt from scratch on every render; there is no diffing.

use crate::models::{Period, SolarSample};

/// Text of the single row shown when there are no samples.
pub const NO_DATA_ROW: &str = "No data available";

pub const COLUMN_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// One row per sample, in sequence order.
    Rows(Vec<[String; COLUMN_COUNT]>),
    /// A single row spanning all columns.
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: [&'static str; COLUMN_COUNT],
    pub body: TableBody,
}

impl TableView {
    pub fn render(samples: &[SolarSample], period: Period) -> Self {
        let headers = [
            period.date_header(),
            "Sunlight Hours",
            "GHI (kWh/m²/day)",
            "PVOUT (kWh/kWp/day)",
        ];
        let body = if samples.is_empty() {
            TableBody::Placeholder(NO_DATA_ROW)
        } else {
            TableBody::Rows(
                samples
                    .iter()
                    .map(|s| {
                        [
                            s.date.clone(),
                            s.sunlight_hours.to_string(),
                            s.ghi.to_string(),
                            s.pvout.to_string(),
                        ]
                    })
                    .collect(),
            )
        };
        Self { headers, body }
    }

    /// Number of visible body rows, placeholder included.
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }

    /// Plain-text rendering with padded columns, for terminals.
    pub fn to_text(&self) -> String {
        let mut widths = self.headers.map(|h| h.chars().count());
        if let TableBody::Rows(rows) = &self.body {
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(row.iter()) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        let header_cells: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &header_cells, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths);

        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    push_line(&mut out, row, &widths);
                }
            }
            TableBody::Placeholder(text) => {
                out.push_str(text);
                out.push('\n');
            }
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize; COLUMN_COUNT]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
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
                sunlight_hours: 7.0,
                ghi: 5.5,
                pvout: 4.0,
            },
        ]
    }

    #[test]
    fn one_row_per_sample_with_raw_values() {
        let view = TableView::render(&samples()[..1], Period::Daily);
        assert_eq!(view.headers[0], "Date");
        assert_eq!(
            view.body,
            TableBody::Rows(vec![[
                "2024-01-01".to_string(),
                "6.2".to_string(),
                "5.1".to_string(),
                "4.3".to_string()
            ]])
        );
    }

    #[test]
    fn whole_numbers_print_without_decimals() {
        let view = TableView::render(&samples()[1..], Period::Daily);
        match view.body {
            TableBody::Rows(rows) => assert_eq!(rows[0][1], "7"),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_renders_one_placeholder_row() {
        for period in Period::ALL {
            let view = TableView::render(&[], period);
            assert_eq!(view.body, TableBody::Placeholder(NO_DATA_ROW));
            assert_eq!(view.row_count(), 1);
        }
    }

    #[test]
    fn monthly_relabels_the_date_column() {
        let view = TableView::render(&samples(), Period::Monthly);
        assert_eq!(view.headers[0], "Month");
    }

    #[test]
    fn rendering_twice_gives_the_same_table() {
        let data = samples();
        let first = TableView::render(&data, Period::Daily);
        let second = TableView::render(&data, Period::Daily);
        assert_eq!(first, second);
        assert_eq!(first.row_count(), 2);
    }

    #[test]
    fn text_rendering_pads_columns() {
        let text = TableView::render(&samples()[..1], Period::Daily).to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date        Sunlight Hours"));
        assert!(lines[2].starts_with("2024-01-01  6.2"));

        let empty = TableView::render(&[], Period::Monthly).to_text();
        assert!(empty.ends_with("No data available\n"));
    }
}
