//! The `predict` subcommand: one request against the live endpoint.

use wfp_model::api::{base_url_from_env, PredictClient};
use wfp_model::geo::Coordinates;
use wfp_session::fallback::Placeholders;
use wfp_session::lifecycle::RequestPhase;
use wfp_session::session::PredictionSession;

/// Run a single prediction and print the resolved display.
pub async fn run_predict(
    lat: f64,
    lon: f64,
    month: u32,
    state: &str,
    api_url: Option<&str>,
) -> anyhow::Result<()> {
    let coordinates = Coordinates::new(lat, lon)
        .ok_or_else(|| anyhow::anyhow!("coordinates out of range: {}, {}", lat, lon))?;

    let mut session = PredictionSession::new();
    session.set_coordinates(coordinates);
    session.set_month_index(month - 1);
    session.set_state_code(state.to_uppercase());

    let (ticket, request) = session
        .begin_submit()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let base_url = api_url
        .map(str::to_string)
        .unwrap_or_else(base_url_from_env);
    let client = PredictClient::new(base_url);
    log::info!("Querying {} for {}/{}", client.base_url(), request.state, request.month);

    let outcome = client.predict(&request).await;
    session.complete(ticket, outcome);

    let placeholders = Placeholders::default();
    println!("{}", session.status_text(&placeholders));

    if session.phase() == RequestPhase::Failed {
        anyhow::bail!("prediction failed");
    }

    let display = session.display(&placeholders);

    println!();
    if display.causes_placeholder {
        println!("Causes (illustrative placeholder values):");
    } else {
        println!("Causes:");
    }
    for cause in &display.causes {
        let acres = match cause.expected_acres {
            Some(a) => format!("  ~{:.0} acres", a),
            None => String::new(),
        };
        println!("  {:<20} {:>5.1}%{}", cause.label, cause.probability * 100.0, acres);
    }

    println!();
    let tag = if display.size_placeholder {
        " (illustrative placeholder)"
    } else {
        ""
    };
    println!(
        "Size estimate{}: expected {} / min {} / max {} acres",
        tag,
        opt_acres(display.size.expected_acres),
        opt_acres(display.size.min_acres),
        opt_acres(display.size.max_acres),
    );

    Ok(())
}

fn opt_acres(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.0}", v))
}
