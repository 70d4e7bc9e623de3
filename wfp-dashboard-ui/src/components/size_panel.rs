//! Fire-size estimate panel.

use crate::format;
use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the resolved expected/min/max acreage triple.
#[component]
pub fn SizePanel() -> Element {
    let state = use_context::<AppState>();
    let display = state.display.read().clone();

    rsx! {
        div {
            style: "margin: 16px 0;",
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px;",
                "Estimated fire size"
                if display.size_placeholder {
                    span {
                        style: "font-weight: normal; color: #9E9E9E; margin-left: 8px; font-size: 12px;",
                        "(illustrative - run a prediction for real values)"
                    }
                }
            }
            div {
                style: "display: flex; gap: 12px;",
                SizeStat { label: "Expected", value: format::acres(display.size.expected_acres) }
                SizeStat { label: "Minimum", value: format::acres(display.size.min_acres) }
                SizeStat { label: "Maximum", value: format::acres(display.size.max_acres) }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SizeStatProps {
    label: String,
    value: String,
}

#[component]
fn SizeStat(props: SizeStatProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px; text-align: center;",
            div {
                style: "font-size: 12px; color: #757575;",
                "{props.label}"
            }
            div {
                style: "font-size: 20px; font-weight: bold;",
                "{props.value}"
            }
            div {
                style: "font-size: 11px; color: #9E9E9E;",
                "acres"
            }
        }
    }
}
