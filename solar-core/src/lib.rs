//! Domain layer of the Thailand solar map.
//!
//! This crate holds everything that does not touch the DOM:
//! - `models`: coordinates, the Thailand service area, solar samples and series
//! - `geocode` / `solar`: HTTP clients for the backend plus pure response decoders
//! - `selection`: the selection state machine with its stale-response guard
//! - `panel`: side-panel geometry (collapse, drag resize, clamping)
//! - `table` / `chart`: view models the renderers draw from
//! - `debounce` / `notice`: search-as-you-type coalescing and transient notices
//!
//! The web front end (`solar-ui`) and the command-line probe (`solar-cmd`)
//! both build on these types.
//!
//! # Example
//!
//! ```rust
//! use solar_core::models::Coordinate;
//! use solar_core::selection::{Completion, SelectionController};
//! use solar_core::solar::decode_solar_response;
//! use solar_core::table::TableView;
//!
//! let mut controller = SelectionController::new();
//! let ticket = controller.select_coordinate(Coordinate::new(13.7563, 100.5018)).unwrap();
//!
//! let body = r#"{"daily":[{"date":"2024-01-01","sunlightHours":6.2,"ghi":5.1,"pvout":4.3}]}"#;
//! assert_eq!(controller.complete(ticket, decode_solar_response(200, body)), Completion::Loaded);
//!
//! let view = controller.active_view().unwrap();
//! assert_eq!(TableView::render(view.samples, view.period).row_count(), 1);
//! ```

pub mod chart;
pub mod config;
pub mod debounce;
pub mod error;
pub mod geocode;
pub mod models;
pub mod notice;
pub mod panel;
pub mod search;
pub mod selection;
pub mod solar;
pub mod table;

pub use error::{Result, SolarError};
