//! Place search box with debounced suggestions and a pick list.

use crate::actions;
use crate::components::NoticeBanner;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn SearchBar() -> Element {
    let state = use_context::<AppState>();
    let text = (state.search_text)();
    let busy = (state.searching)();
    let suggestions = state.suggestions.read().clone();

    rsx! {
        div {
            class: "search-container",
            style: "position: absolute; top: 12px; left: 56px; z-index: 1000; width: 320px;",
            div {
                style: "display: flex; gap: 4px;",
                input {
                    r#type: "text",
                    placeholder: "Search a place in Thailand",
                    value: "{text}",
                    style: "flex: 1; padding: 6px 8px;",
                    oninput: move |evt: Event<FormData>| actions::search_input_changed(state, evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            actions::submit_search(state);
                        }
                    },
                }
                button {
                    disabled: busy,
                    onclick: move |_| actions::submit_search(state),
                    if busy { "…" } else { "🔍" }
                }
            }
            if !suggestions.is_empty() {
                div {
                    class: "search-results-dropdown",
                    style: "background: white; color: #222; max-height: 240px; overflow-y: auto; border: 1px solid #ccc;",
                    for (i, result) in suggestions.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "search-result-item",
                            style: "padding: 6px 8px; cursor: pointer;",
                            onclick: {
                                let result = result.clone();
                                move |_| actions::pick_suggestion(state, result.clone())
                            },
                            "{result.display_name}"
                        }
                    }
                }
            }
            NoticeBanner {}
        }
    }
}
