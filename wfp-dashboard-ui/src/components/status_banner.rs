//! Status banner driven by the request lifecycle.

use crate::state::AppState;
use dioxus::prelude::*;
use wfp_session::lifecycle::RequestPhase;

/// Shows the composed status text, styled by lifecycle phase: guidance
/// in blue, an in-flight submission in amber, success in green, and a
/// failed prediction as a red error box.
#[component]
pub fn StatusBanner() -> Element {
    let state = use_context::<AppState>();
    let message = (state.status)();
    let phase = state.session.read().phase();

    let style = match phase {
        RequestPhase::Failed => {
            "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;"
        }
        RequestPhase::Succeeded => {
            "padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #2E7D32; border-radius: 4px; border: 1px solid #A5D6A7;"
        }
        RequestPhase::Running => {
            "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;"
        }
        _ => {
            "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9;"
        }
    };

    rsx! {
        div {
            style: "{style}",
            if phase == RequestPhase::Failed {
                strong { "Prediction failed: " }
            }
            "{message}"
        }
    }
}
