//! Panel header: location name, coordinates, period title and covered range.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn PanelHeader() -> Element {
    let state = use_context::<AppState>();
    let name = (state.location_name)();
    let (coords, title, coverage) = {
        let selection = state.selection.read();
        let current = selection.state();
        (
            current
                .marker
                .map(|at| (format!("{:.6}", at.lat), format!("{:.6}", at.lng))),
            current.period.title(),
            current.series.as_ref().and_then(|s| s.coverage()),
        )
    };

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                id: "location-name",
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{name}"
            }
            if let Some((lat, lng)) = coords {
                p {
                    style: "margin: 0; font-size: 12px; color: #aaa;",
                    "Lat: "
                    span { id: "lat", "{lat}" }
                    ", Lng: "
                    span { id: "lng", "{lng}" }
                }
            }
            h4 {
                id: "period-title",
                style: "margin: 8px 0 4px 0;",
                "{title}"
            }
            if let Some((start, end)) = coverage {
                p {
                    style: "margin: 0; font-size: 12px; color: #aaa;",
                    "Data range: {start} to {end}"
                }
            }
        }
    }
}
