//! Loading spinner component.

use dioxus::prelude::*;

/// Shown in place of the table and chart while a fetch is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; height: 200px; color: #ccc;",
            "Loading solar data..."
        }
    }
}
