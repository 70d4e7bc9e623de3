//! Month dropdown selector.

use crate::state::AppState;
use dioxus::prelude::*;
use wfp_session::input::month_label;

/// Dropdown for the prediction month. Defaults to January, so the month
/// never blocks submission.
#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.session.read().input().month_index();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(index) = evt.value().parse::<u32>() {
            state.session.write().set_month_index(index);
            state.refresh();
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "month-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Month: "
            }
            select {
                id: "month-select",
                onchange: on_change,
                for index in 0u32..12 {
                    option {
                        value: "{index}",
                        selected: index == selected,
                        {month_label(index)}
                    }
                }
            }
        }
    }
}
