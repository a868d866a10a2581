//! Chart container component: Chart.js renders into it, or a placeholder
//! is shown when the active period has no samples.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use solar_core::chart::ChartView;

/// DOM id the chart bridge renders into.
pub const CHART_CONTAINER_ID: &str = "solar-chart-container";

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Height of the chart area in pixels
    #[props(default = 220)]
    pub height: u32,
}

/// Line chart of the active period's samples.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();

    // Re-render whenever the selection changes; the bridge destroys the old
    // instance before drawing.
    use_effect(move || {
        let selection = state.selection.read();
        match selection.active_view().map(|view| ChartView::render(view.samples)) {
            Some(ChartView::Chart(spec)) => js_bridge::render_chart(CHART_CONTAINER_ID, &spec),
            _ => js_bridge::destroy_chart(),
        }
    });

    use_drop(js_bridge::destroy_chart);

    let placeholder = match state
        .selection
        .read()
        .active_view()
        .map(|view| ChartView::render(view.samples))
    {
        Some(ChartView::Placeholder(text)) => Some(text),
        _ => None,
    };
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        if let Some(text) = placeholder {
            div {
                style: "text-align: center; padding: 40px;",
                "{text}"
            }
        } else {
            div {
                id: CHART_CONTAINER_ID,
                style: "{style}",
            }
        }
    }
}
