//! The request lifecycle state machine.
//!
//! Exactly one submission is current at a time. There is no network
//! cancellation: an older request keeps running, but its completion
//! carries a [`RequestTicket`] that no longer matches the lifecycle's
//! sequence number and is discarded, so late stale responses can never
//! overwrite newer state.

use wfp_model::request::{PredictError, PredictRequest};

use crate::input::InputState;

/// Where the lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Identifies one submission; completions quote it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Drives `Idle -> Running -> {Succeeded, Failed}`, re-entering
/// `Running` from any state on a new submission.
#[derive(Debug, Clone)]
pub struct RequestLifecycle {
    phase: RequestPhase,
    error: Option<String>,
    seq: u64,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self {
            phase: RequestPhase::Idle,
            error: None,
            seq: 0,
        }
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == RequestPhase::Running
    }

    /// The failure message, when the last submission failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while `ticket` belongs to the latest submission.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.seq
    }

    /// Validate the inputs and start a submission.
    ///
    /// The guard checks state first, then location, and fails fast
    /// without reaching the network. On success the held result is
    /// discarded, the sequence advances, and the wire payload is
    /// synthesized (month converted to 1-indexed).
    pub fn begin(
        &mut self,
        input: &mut InputState,
    ) -> Result<(RequestTicket, PredictRequest), PredictError> {
        if input.state_code().is_empty() {
            return Err(self.fail_validation("state required"));
        }
        let coordinates = match input.coordinates() {
            Some(c) => c,
            None => return Err(self.fail_validation("location required")),
        };

        input.discard_result();
        self.seq += 1;
        self.phase = RequestPhase::Running;
        self.error = None;

        let request = PredictRequest {
            lat: coordinates.lat,
            lon: coordinates.lng,
            month: input.month_index() + 1,
            state: input.state_code().to_string(),
        };
        Ok((RequestTicket(self.seq), request))
    }

    /// Mark the submission succeeded. Returns false (and changes
    /// nothing) when a newer submission has superseded the ticket.
    pub fn succeed(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale success (ticket {} != {})", ticket.0, self.seq);
            return false;
        }
        self.phase = RequestPhase::Succeeded;
        self.error = None;
        true
    }

    /// Mark the submission failed with the resolved message. Stale
    /// tickets are discarded as in [`Self::succeed`].
    pub fn fail(&mut self, ticket: RequestTicket, error: &PredictError) -> bool {
        if !self.is_current(ticket) {
            log::debug!("discarding stale failure (ticket {} != {})", ticket.0, self.seq);
            return false;
        }
        self.phase = RequestPhase::Failed;
        self.error = Some(error.message().to_string());
        true
    }

    fn fail_validation(&mut self, message: &str) -> PredictError {
        let error = PredictError::Validation(message.to_string());
        self.phase = RequestPhase::Failed;
        self.error = Some(message.to_string());
        error
    }
}

impl Default for RequestLifecycle {
    fn default() -> Self {
        Self::new()
    }
}
