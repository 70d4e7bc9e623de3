//! Human-readable status banner text.

use wfp_model::request::GENERIC_REQUEST_ERROR;

use crate::fallback::ResolvedDisplay;
use crate::lifecycle::RequestPhase;

/// Guidance before the first submission.
pub const STATUS_INITIAL: &str =
    "Pick a location, choose a month and state, then run a prediction.";

/// Guidance once inputs changed after a result existed.
pub const STATUS_REFRESH: &str =
    "Inputs changed. Run the prediction again to refresh the results.";

/// Shown while a submission is in flight.
pub const STATUS_RUNNING: &str = "Running prediction...";

/// Success message when no cause is available at all.
pub const STATUS_COMPLETE: &str = "Prediction complete.";

/// Compose the status banner from lifecycle state and resolved display.
///
/// Precedence: a running submission, then stale-input guidance (the
/// held result is already gone, so it outranks an old terminal banner),
/// then the terminal phase, then the initial guidance.
pub fn compose(
    phase: RequestPhase,
    error: Option<&str>,
    stale: bool,
    display: &ResolvedDisplay,
) -> String {
    match phase {
        RequestPhase::Running => STATUS_RUNNING.to_string(),
        _ if stale => STATUS_REFRESH.to_string(),
        RequestPhase::Failed => error.unwrap_or(GENERIC_REQUEST_ERROR).to_string(),
        RequestPhase::Succeeded => success_message(display),
        RequestPhase::Idle => STATUS_INITIAL.to_string(),
    }
}

fn success_message(display: &ResolvedDisplay) -> String {
    let mut message = match display.causes.first() {
        Some(top) => format!("Most likely cause: {}.", top.label),
        None => STATUS_COMPLETE.to_string(),
    };
    if let Some(expected) = display.size.expected_acres {
        message.push_str(&format!(
            " Estimated fire size is around {:.0} acres.",
            expected
        ));
    }
    if display.causes.len() > 1 {
        message.push_str(" Additional cause probabilities are shown below.");
    }
    message
}
