//! Thailand Solar Map
//!
//! Click the map or search a place name to see sunlight hours, GHI and PVOUT
//! for that point, as a table and a line chart in a resizable side panel.
//!
//! Data flow:
//! 1. Leaflet reports clicks through `window.__solarMapClick`, which writes
//!    `AppState::pending_click`; an effect here turns it into a selection.
//! 2. Search input is debounced and geocoded into a suggestion list.
//! 3. Every selection fetches `/api/solar-data` from the backend configured
//!    at build time (`SOLAR_API_BASE_URL`, default `http://localhost:5000`).
//! 4. The panel renders the active period from the held series; switching
//!    period never refetches.

use dioxus::prelude::*;
use solar_core::config::ApiConfig;
use solar_ui::actions;
use solar_ui::components::{DataPanel, MapView, SearchBar};
use solar_ui::js_bridge;
use solar_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("solar-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| AppState::new(ApiConfig::from_build_env()));

    // Evaluate the Leaflet/Chart.js glue once
    use_hook(js_bridge::init_bridge);

    // Map clicks arrive from JS; handle them inside the runtime
    use_effect(move || {
        if let Some(at) = (state.pending_click)() {
            state.pending_click.set(None);
            actions::select_map_point(state, at);
        }
    });

    let resizing = state.panel.read().is_resizing();

    rsx! {
        div {
            style: "display: flex; width: 100vw; height: 100vh; overflow: hidden; position: relative; font-family: system-ui, -apple-system, sans-serif;",

            SearchBar {}
            MapView {}
            DataPanel {}

            // Drag overlay - captures mouse events during a panel resize
            if resizing {
                div {
                    style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 2000; cursor: col-resize;",
                    onmousemove: move |evt: Event<MouseData>| {
                        actions::drag_resize(state, evt.client_coordinates().x);
                    },
                    onmouseup: move |_| actions::end_resize(state),
                    onmouseleave: move |_| actions::end_resize(state),
                }
            }
        }
    }
}
