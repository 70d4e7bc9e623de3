//! Titled panel for the D3-rendered seasonality chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// The DOM id the bar chart renders into
    pub id: String,
    /// Heading shown above the chart
    pub title: String,
}

/// Container for the illustrative fires-by-month chart. The D3 bridge
/// polls for the inner div by id, so the chart fills in whenever the
/// scripts finish loading.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-top: 24px;",
            h4 {
                style: "margin: 0 0 4px 0; font-size: 14px;",
                "{props.title}"
            }
            div {
                id: "{props.id}",
                style: "min-height: 280px; width: 100%;",
            }
        }
    }
}
