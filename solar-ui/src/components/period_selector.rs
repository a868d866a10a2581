//! Dropdown selector for the displayed period.

use crate::actions;
use crate::state::AppState;
use dioxus::prelude::*;
use solar_core::models::Period;

/// Period dropdown. Switching re-renders from the held series; nothing is
/// refetched.
#[component]
pub fn PeriodSelector() -> Element {
    let state = use_context::<AppState>();
    let selected = state.selection.read().state().period;

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Period>() {
        Ok(period) => actions::change_period(state, period),
        Err(e) => log::warn!("{}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "period-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Period: "
            }
            select {
                id: "period-select",
                onchange: on_change,
                for period in Period::ALL {
                    option {
                        value: period.as_str(),
                        selected: period == selected,
                        {period.label()}
                    }
                }
            }
        }
    }
}
