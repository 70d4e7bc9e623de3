//! US state/territory dropdown selector.

use crate::state::AppState;
use dioxus::prelude::*;
use wfp_model::geo::US_STATE_CODES;

/// Dropdown for the state code. The empty option means unselected and
/// keeps submission blocked.
#[component]
pub fn StateSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.session.read().input().state_code().to_string();

    let on_change = move |evt: Event<FormData>| {
        state.session.write().set_state_code(evt.value());
        state.refresh();
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "state-select",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "state-select",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "Select a state"
                }
                for code in US_STATE_CODES.iter() {
                    option {
                        value: "{code}",
                        selected: *code == selected,
                        "{code}"
                    }
                }
            }
        }
    }
}
