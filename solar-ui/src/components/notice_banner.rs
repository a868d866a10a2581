//! Transient notice banner.

use crate::state::AppState;
use dioxus::prelude::*;
use solar_core::notice::Severity;

/// Displays the current notice, if any. Expiry is handled by `actions::notify`.
#[component]
pub fn NoticeBanner() -> Element {
    let state = use_context::<AppState>();
    let notice = state.notices.read().current().cloned();

    rsx! {
        if let Some(notice) = notice {
            div {
                class: "search-error-message",
                style: match notice.severity {
                    Severity::Error => "padding: 8px 12px; margin-top: 6px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                    Severity::Info => "padding: 8px 12px; margin-top: 6px; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
                },
                "{notice.message}"
            }
        }
    }
}
