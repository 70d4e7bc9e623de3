//! Facade tying input, lifecycle, fallback, and status together.

use serde_json::Value;
use wfp_model::geo::Coordinates;
use wfp_model::normalize::normalize;
use wfp_model::request::{PredictError, PredictRequest};

use crate::fallback::{resolve_display, Placeholders, ResolvedDisplay};
use crate::input::InputState;
use crate::lifecycle::{RequestLifecycle, RequestPhase, RequestTicket};
use crate::status;

/// One user's prediction session: selections, the in-flight request,
/// and the held result.
///
/// The session is framework-independent; UI layers wrap it in whatever
/// reactive cell they use and call [`Self::display`] /
/// [`Self::status_text`] after each mutation.
#[derive(Debug, Clone, Default)]
pub struct PredictionSession {
    input: InputState,
    lifecycle: RequestLifecycle,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn phase(&self) -> RequestPhase {
        self.lifecycle.phase()
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn ready_to_submit(&self) -> bool {
        self.input.ready_to_submit()
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.input.set_coordinates(coordinates);
    }

    pub fn set_month_index(&mut self, index: u32) {
        self.input.set_month_index(index);
    }

    pub fn set_state_code(&mut self, code: impl Into<String>) {
        self.input.set_state_code(code);
    }

    /// Validate and start a submission; see [`RequestLifecycle::begin`].
    pub fn begin_submit(&mut self) -> Result<(RequestTicket, PredictRequest), PredictError> {
        self.lifecycle.begin(&mut self.input)
    }

    /// Feed a transport outcome back into the session.
    ///
    /// Success normalizes the raw payload and stores the result;
    /// failure records the message. Returns false when the ticket was
    /// superseded and the outcome was discarded.
    pub fn complete(&mut self, ticket: RequestTicket, outcome: Result<Value, PredictError>) -> bool {
        match outcome {
            Ok(raw) => {
                if !self.lifecycle.succeed(ticket) {
                    return false;
                }
                self.input.store_result(normalize(&raw));
                true
            }
            Err(error) => self.lifecycle.fail(ticket, &error),
        }
    }

    /// Resolve everything the dashboard renders.
    pub fn display(&self, placeholders: &Placeholders) -> ResolvedDisplay {
        resolve_display(self.input.result(), placeholders)
    }

    /// The current status banner.
    pub fn status_text(&self, placeholders: &Placeholders) -> String {
        status::compose(
            self.lifecycle.phase(),
            self.lifecycle.error(),
            self.input.stale(),
            &self.display(placeholders),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{STATUS_INITIAL, STATUS_REFRESH, STATUS_RUNNING};
    use serde_json::json;
    use wfp_model::request::response_outcome;

    fn ready_session() -> PredictionSession {
        let mut session = PredictionSession::new();
        session.set_state_code("CA");
        session.set_coordinates(Coordinates::new(38.5, -121.5).unwrap());
        session
    }

    #[test]
    fn fresh_session_shows_initial_guidance_and_placeholders() {
        let session = PredictionSession::new();
        let placeholders = Placeholders::default();
        assert_eq!(session.status_text(&placeholders), STATUS_INITIAL);

        let display = session.display(&placeholders);
        assert!(display.causes_placeholder);
        assert!(display.size_placeholder);
    }

    #[test]
    fn validation_failure_without_state_never_builds_a_request() {
        let mut session = PredictionSession::new();
        session.set_coordinates(Coordinates::new(38.5, -121.5).unwrap());

        let err = session.begin_submit().unwrap_err();
        assert_eq!(err, PredictError::Validation("state required".into()));
        assert_eq!(session.phase(), RequestPhase::Failed);
        assert_eq!(
            session.status_text(&Placeholders::default()),
            "state required"
        );
    }

    #[test]
    fn running_status_while_in_flight() {
        let mut session = ready_session();
        session.begin_submit().unwrap();
        assert_eq!(session.status_text(&Placeholders::default()), STATUS_RUNNING);
    }

    #[test]
    fn display_stays_resolved_while_running() {
        let mut session = ready_session();
        session.begin_submit().unwrap();
        assert!(session.is_running());

        // The in-flight submission discarded the held result, so the
        // panels fall back to placeholders rather than going blank.
        let display = session.display(&Placeholders::default());
        assert!(display.causes_placeholder);
        assert_eq!(display.causes.len(), 4);
        assert!(display.size_placeholder);
    }

    #[test]
    fn successful_round_trip_with_per_cause_sizes() {
        let mut session = ready_session();
        let (ticket, _) = session.begin_submit().unwrap();

        let raw = json!({
            "sizes_by_cause": [
                {"label": "Lightning", "probability": 0.6,
                 "expected_acres": 4000, "min_acres": 2500, "max_acres": 6000},
                {"label": "Human", "value": 25}
            ]
        });
        assert!(session.complete(ticket, Ok(raw)));

        let display = session.display(&Placeholders::default());
        assert!(!display.causes_placeholder);
        assert_eq!(display.causes.len(), 2);
        assert_eq!(display.size.expected_acres, Some(4000.0));

        let status = session.status_text(&Placeholders::default());
        assert!(status.starts_with("Most likely cause: Lightning."));
        assert!(status.contains("around 4000 acres"));
        assert!(status.ends_with("Additional cause probabilities are shown below."));
    }

    #[test]
    fn empty_success_body_falls_back_to_placeholders() {
        let mut session = ready_session();
        let (ticket, _) = session.begin_submit().unwrap();
        session.complete(ticket, response_outcome(200, "OK", ""));

        let display = session.display(&Placeholders::default());
        assert!(display.causes_placeholder);
        assert!(display.size_placeholder);
        assert_eq!(display.causes.len(), 4);
        assert_eq!(display.size.expected_acres, Some(3807.0));
    }

    #[test]
    fn http_failure_surfaces_detail_and_clears_result() {
        let mut session = ready_session();

        // Seed a previous success.
        let (ticket, _) = session.begin_submit().unwrap();
        session.complete(
            ticket,
            Ok(json!({"cause_probabilities": [{"label": "Arson", "probability": 0.8}]})),
        );
        assert!(session.input().has_prediction());

        // Resubmit and fail with a detail body.
        let (ticket, _) = session.begin_submit().unwrap();
        assert!(!session.input().has_prediction());
        session.complete(
            ticket,
            response_outcome(404, "Not Found", r#"{"detail":"location out of coverage"}"#),
        );

        assert_eq!(session.phase(), RequestPhase::Failed);
        assert!(!session.input().has_prediction());
        assert_eq!(
            session.status_text(&Placeholders::default()),
            "location out of coverage"
        );
    }

    #[test]
    fn input_change_after_result_flips_status_to_refresh() {
        let mut session = ready_session();
        let (ticket, _) = session.begin_submit().unwrap();
        session.complete(ticket, Ok(json!({"predicted_size_acres": 100.0})));
        assert_eq!(session.phase(), RequestPhase::Succeeded);

        session.set_month_index(9);
        assert!(!session.input().has_prediction());
        assert_eq!(session.status_text(&Placeholders::default()), STATUS_REFRESH);
    }

    #[test]
    fn late_response_for_superseded_submission_is_discarded() {
        let mut session = ready_session();
        let (old_ticket, _) = session.begin_submit().unwrap();
        let (new_ticket, _) = session.begin_submit().unwrap();

        // Old response resolves after the newer submission began.
        assert!(!session.complete(old_ticket, Ok(json!({"predicted_size_acres": 1.0}))));
        assert!(session.is_running());
        assert!(!session.input().has_prediction());

        assert!(session.complete(new_ticket, Ok(json!({"predicted_size_acres": 2.0}))));
        let display = session.display(&Placeholders::default());
        assert_eq!(display.size.expected_acres, Some(2.0));
    }
}
