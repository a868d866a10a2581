//! Leaflet map host.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use solar_core::config::{INITIAL_CENTER, INITIAL_ZOOM};
use solar_core::models::Coordinate;

pub const MAP_CONTAINER_ID: &str = "map-container";

/// The map fills the space left of the panel. Clicks are written to
/// `AppState::pending_click` and handled by the app root.
#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<AppState>();

    use_hook(move || {
        js_bridge::register_map_click(move |lat, lng| {
            state.pending_click.set(Some(Coordinate::new(lat, lng)));
        });
        let (lat, lng) = INITIAL_CENTER;
        js_bridge::init_map(MAP_CONTAINER_ID, Coordinate::new(lat, lng), INITIAL_ZOOM);
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "flex: 1 1 auto; height: 100%;",
        }
    }
}
