//! Collapsible, resizable side panel with the table and chart.

use crate::actions;
use crate::components::{ChartContainer, DataTable, LoadingSpinner, PanelHeader, PeriodSelector};
use crate::state::AppState;
use dioxus::prelude::*;
use solar_core::table::TableView;

/// Handlers are bound once here; whether they do anything follows from
/// `PanelLayout` and the selection state.
#[component]
pub fn DataPanel() -> Element {
    let state = use_context::<AppState>();
    let panel = (state.panel)();
    let (loading, table) = {
        let selection = state.selection.read();
        let table = selection
            .active_view()
            .map(|view| TableView::render(view.samples, view.period));
        (selection.is_loading(), table)
    };

    let width = panel.rendered_width();
    let panel_style = if panel.is_collapsed() {
        "width: 0; max-width: 0; flex: 0 0 0; padding: 0; overflow: hidden; opacity: 0; pointer-events: none;".to_string()
    } else {
        format!(
            "width: {w}px; max-width: {w}px; flex: 0 0 {w}px; padding: 15px; overflow: auto; opacity: 1; pointer-events: auto;",
            w = width
        )
    };
    let toggle_left = if panel.is_collapsed() { -25 } else { -15 };

    rsx! {
        div {
            style: "position: relative; display: flex; height: 100%;",
            div {
                class: "panel-toggle",
                style: "position: absolute; top: 50%; left: {toggle_left}px; z-index: 1001;",
                button {
                    id: "toggle-panel",
                    onclick: move |_| actions::toggle_panel(state),
                    {panel.toggle_glyph()}
                }
            }
            div {
                id: "panel-resizer",
                style: "width: 6px; cursor: col-resize; background: #333;",
                onmousedown: move |evt: Event<MouseData>| {
                    evt.prevent_default();
                    actions::start_resize(state, evt.client_coordinates().x);
                },
            }
            div {
                id: "data-panel",
                class: if panel.is_collapsed() { "collapsed" } else { "" },
                style: "{panel_style} transition: width 0.3s, flex-basis 0.3s; background: #1e1e1e; color: white;",
                PanelHeader {}
                PeriodSelector {}
                div {
                    id: "solar-data",
                    if loading {
                        LoadingSpinner {}
                    } else if let Some(view) = table {
                        DataTable { view }
                        ChartContainer {}
                    } else {
                        p {
                            style: "color: #aaa;",
                            "Click the map or search for a place to see solar metrics."
                        }
                    }
                }
            }
        }
    }
}
