//! User intents: map clicks, searches, period switches and panel gestures.
//!
//! Each action drives the `solar-core` state machines held in [`AppState`]
//! and performs the side effects they ask for (fetches, map moves, chart
//! re-fits, notices). Must be called from within the Dioxus runtime
//! (event handlers, effects, spawned tasks).

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use solar_core::config::{LAYOUT_SETTLE_MS, NOTICE_LIFETIME_MS, SEARCH_RESULT_ZOOM};
use solar_core::geocode::SearchQuery;
use solar_core::models::{Coordinate, GeocodeResult, Period};
use solar_core::notice::Severity;
use solar_core::search::{SearchResolution, NO_RESULTS_NOTICE, SEARCH_FAILED_NOTICE};
use solar_core::selection::{Completion, FetchTicket};

/// Panel heading used for map clicks.
pub const CLICKED_LOCATION_NAME: &str = "Selected Location";

/// Show a transient notice. It replaces any visible one and removes itself
/// after its lifetime unless replaced first.
pub fn notify(mut state: AppState, severity: Severity, message: impl Into<String>) {
    let id = state.notices.write().post(severity, message);
    spawn(async move {
        TimeoutFuture::new(NOTICE_LIFETIME_MS).await;
        state.notices.write().expire(id);
    });
}

/// Re-fit map and chart once the panel's CSS transition has settled.
pub fn refit_after_transition() {
    spawn(async move {
        TimeoutFuture::new(LAYOUT_SETTLE_MS).await;
        js_bridge::invalidate_map();
        js_bridge::resize_chart();
    });
}

/// A click on the map.
pub fn select_map_point(mut state: AppState, at: Coordinate) {
    info!("Clicked at coordinates: {:.6}, {:.6}", at.lat, at.lng);
    let selected = state.selection.write().select_coordinate(at);
    let ticket = match selected {
        Ok(ticket) => ticket,
        Err(err) => {
            notify(state, Severity::Error, err.to_string());
            return;
        }
    };
    state.location_name.set(CLICKED_LOCATION_NAME.to_string());
    start_fetch(state, ticket);
}

/// A geocoding candidate chosen by the user or auto-applied.
pub fn apply_search_result(mut state: AppState, result: &GeocodeResult) {
    let selected = state.selection.write().select_search_result(result);
    let ticket = match selected {
        Ok(ticket) => ticket,
        Err(err) => {
            notify(state, Severity::Error, err.to_string());
            return;
        }
    };
    js_bridge::center_map(ticket.coordinate, SEARCH_RESULT_ZOOM);
    state.location_name.set(result.display_name.clone());
    start_fetch(state, ticket);
}

/// Place the marker, open the panel and fetch the series for `ticket`.
fn start_fetch(mut state: AppState, ticket: FetchTicket) {
    js_bridge::place_marker(ticket.coordinate);
    if state.panel.write().expand() {
        refit_after_transition();
    }

    let client = state.backend.peek().solar.clone();
    spawn(async move {
        let outcome = client.fetch(ticket.coordinate).await;
        let completion = state.selection.write().complete(ticket, outcome);
        if let Completion::Failed(err) = completion {
            notify(state, Severity::Error, err.to_string());
        }
        refit_after_transition();
    });
}

/// Switch the displayed period. Rendering follows from the state change.
pub fn change_period(mut state: AppState, period: Period) {
    state.selection.write().change_period(period);
}

/// A keystroke in the search box.
pub fn search_input_changed(mut state: AppState, text: String) {
    state.search_text.set(text.clone());
    state.notices.write().dismiss();

    let Some(query) = SearchQuery::parse(&text) else {
        state.debouncer.write().cancel();
        state.suggestions.set(Vec::new());
        return;
    };

    let ticket = state.debouncer.write().schedule(query);
    let window = state.debouncer.peek().window_ms();
    spawn(async move {
        TimeoutFuture::new(window).await;
        if !state.debouncer.peek().is_current(&ticket) {
            return;
        }
        let geocoder = state.backend.peek().geocoder.clone();
        let outcome = geocoder.search(&ticket.value).await;
        // Typing, picking or submitting since the request went out wins.
        if !state.debouncer.peek().is_current(&ticket) {
            debug!("Dropping suggestions for superseded query {:?}", ticket.value.as_str());
            return;
        }
        match outcome {
            Ok(results) => state.suggestions.set(results),
            Err(err) => warn!("Error fetching suggestions: {}", err),
        }
    });
}

/// The search button or Enter.
///
/// Applies the first visible suggestion if there is one; otherwise asks the
/// geocoder and applies a single match or lists several.
pub fn submit_search(mut state: AppState) {
    let Some(query) = SearchQuery::parse(&state.search_text.read()) else {
        return;
    };

    let first = state.suggestions.read().first().cloned();
    if let Some(result) = first {
        pick_suggestion(state, result);
        return;
    }

    state.debouncer.write().cancel();
    state.searching.set(true);
    let geocoder = state.backend.peek().geocoder.clone();
    spawn(async move {
        let outcome = geocoder.search(&query).await;
        state.searching.set(false);
        match outcome {
            Ok(results) => match SearchResolution::from_results(results) {
                SearchResolution::NoMatch => notify(state, Severity::Info, NO_RESULTS_NOTICE),
                SearchResolution::Single(result) => apply_search_result(state, &result),
                SearchResolution::Choices(results) => state.suggestions.set(results),
            },
            Err(err) => {
                warn!("Search error: {}", err);
                notify(state, Severity::Error, SEARCH_FAILED_NOTICE);
            }
        }
    });
}

/// A click on one entry of the suggestion list.
pub fn pick_suggestion(mut state: AppState, result: GeocodeResult) {
    state.debouncer.write().cancel();
    state.search_text.set(result.display_name.clone());
    state.suggestions.set(Vec::new());
    apply_search_result(state, &result);
}

/// The panel's collapse/expand button.
pub fn toggle_panel(mut state: AppState) {
    let selected = state.selection.read().state().location_selected;
    if state.panel.write().toggle(selected) {
        refit_after_transition();
    }
}

pub fn start_resize(mut state: AppState, pointer_x: f64) {
    state.panel.write().start_resize(pointer_x);
}

pub fn drag_resize(mut state: AppState, pointer_x: f64) {
    if state.panel.write().drag_resize(pointer_x).is_some() {
        js_bridge::resize_chart();
    }
}

pub fn end_resize(mut state: AppState) {
    if state.panel.write().end_resize() {
        js_bridge::resize_chart();
    }
}
