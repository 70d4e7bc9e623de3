//! Wildfire Prediction Dashboard
//!
//! Lets the user pick a location, month, and state, submits a
//! prediction request to the model-serving endpoint, and renders the
//! returned wildfire-cause and fire-size estimates alongside a static
//! illustrative fires-by-month chart.
//!
//! Data flow:
//! 1. Selections mutate the `PredictionSession`; any change invalidates
//!    a held result and flips the banner to the refresh guidance.
//! 2. Run Prediction validates, POSTs `/predict`, and feeds the outcome
//!    back through the session (stale responses are discarded by
//!    ticket).
//! 3. `build.rs` aggregates `fires_by_month.csv` into `OUT_DIR`;
//!    `include_str!` embeds the totals, rendered once via D3.

use dioxus::prelude::*;
use wfp_dashboard_ui::components::{
    CauseTable, ChartPanel, LocationPicker, MonthSelector, SizePanel, StateSelector, StatusBanner,
};
use wfp_dashboard_ui::state::AppState;
use wfp_dashboard_ui::{chartdata, js_bridge, net};
use wfp_model::request::DEFAULT_API_URL;

/// Monthly fire totals aggregated by the build script.
const FIRES_BY_MONTH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/fires_by_month.csv"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_FIRES_ID: &str = "fires-by-month-chart";

/// Endpoint base URL, selected at compile time for the WASM bundle.
const API_URL: &str = match option_env!("WFP_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_URL,
};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("predict-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Render the static illustrative chart on mount
    use_effect(move || {
        js_bridge::init_charts();

        let data = chartdata::parse_month_counts(FIRES_BY_MONTH_CSV);
        if data.is_empty() {
            log::warn!("No fires-by-month data embedded; skipping chart");
            return;
        }

        let data_json = serde_json::to_string(&data).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "title": "Reported wildfires by month (historical sample)",
            "barColor": "#E64A19",
            "height": 280,
        }))
        .unwrap_or_default();

        js_bridge::render_bar_chart(CHART_FIRES_ID, &data_json, &config_json);
    });

    let ready = state.session.read().ready_to_submit();
    let running = state.session.read().is_running();

    let on_submit = move |_| {
        spawn(async move {
            let begun = {
                let mut session = state.session.write();
                session.begin_submit()
            };
            state.refresh();

            let (ticket, request) = match begun {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("Submission rejected: {}", e);
                    return;
                }
            };

            let outcome = net::post_predict(API_URL, &request).await;
            let applied = state.session.write().complete(ticket, outcome);
            if applied {
                state.refresh();
            } else {
                log::debug!("Stale prediction response discarded");
            }
        });
    };

    rsx! {
        div {
            style: "padding: 16px; max-width: 900px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            div {
                style: "margin-bottom: 8px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "Wildfire Cause & Size Prediction"
                }
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Pick a location, month, and state; estimates come from the remote prediction model."
                }
            }

            div {
                style: "display: flex; gap: 24px; flex-wrap: wrap; align-items: center;",
                LocationPicker {}
                MonthSelector {}
                StateSelector {}
            }

            button {
                style: "margin: 8px 0; padding: 8px 20px; font-size: 14px; cursor: pointer;",
                disabled: !ready || running,
                onclick: on_submit,
                "Run Prediction"
            }

            StatusBanner {}

            CauseTable {}
            SizePanel {}

            ChartPanel {
                id: CHART_FIRES_ID.to_string(),
                title: "Seasonality context".to_string(),
            }

            div {
                style: "margin-top: 12px; padding: 8px 12px; background: #F5F5F5; border-radius: 4px; font-size: 12px; color: #616161; border: 1px solid #E0E0E0;",
                "Cause probabilities are independent model scores and need not sum to 100%."
            }
        }
    }
}
