//! Table of wildfire-cause estimates.

use crate::format;
use crate::state::AppState;
use dioxus::prelude::*;

/// Renders the resolved cause list (real or placeholder) with
/// probability and optional acreage columns.
#[component]
pub fn CauseTable() -> Element {
    let state = use_context::<AppState>();
    let display = state.display.read().clone();

    rsx! {
        div {
            style: "margin: 16px 0;",
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px;",
                "Likely causes"
                if display.causes_placeholder {
                    span {
                        style: "font-weight: normal; color: #9E9E9E; margin-left: 8px; font-size: 12px;",
                        "(illustrative - run a prediction for real values)"
                    }
                }
            }
            table {
                style: "border-collapse: collapse; width: 100%; font-size: 13px;",
                thead {
                    tr {
                        th { style: "text-align: left; border-bottom: 1px solid #E0E0E0; padding: 4px 8px;", "Cause" }
                        th { style: "text-align: right; border-bottom: 1px solid #E0E0E0; padding: 4px 8px;", "Probability" }
                        th { style: "text-align: right; border-bottom: 1px solid #E0E0E0; padding: 4px 8px;", "Expected acres" }
                        th { style: "text-align: right; border-bottom: 1px solid #E0E0E0; padding: 4px 8px;", "Min" }
                        th { style: "text-align: right; border-bottom: 1px solid #E0E0E0; padding: 4px 8px;", "Max" }
                    }
                }
                tbody {
                    for cause in display.causes.iter() {
                        tr {
                            td { style: "padding: 4px 8px;", "{cause.label}" }
                            td { style: "padding: 4px 8px; text-align: right;", {format::percent(cause.probability)} }
                            td { style: "padding: 4px 8px; text-align: right;", {format::acres(cause.expected_acres)} }
                            td { style: "padding: 4px 8px; text-align: right;", {format::acres(cause.min_acres)} }
                            td { style: "padding: 4px 8px; text-align: right;", {format::acres(cause.max_acres)} }
                        }
                    }
                }
            }
        }
    }
}
