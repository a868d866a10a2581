//! Shared Dioxus components and Leaflet/Chart.js bridge for the solar map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart glue via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `actions`: user intents driving the `solar-core` state machines
//! - `components`: RSX components (search bar, map, data panel, table, chart)

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;
