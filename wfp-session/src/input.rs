//! User input state and result invalidation.

use wfp_model::geo::{is_state_code, Coordinates};
use wfp_model::prediction::PredictionResult;

/// Month index used before the user touches the selector (January).
pub const DEFAULT_MONTH_INDEX: u32 = 0;

/// Display name for a 0-based month index.
pub fn month_label(index: u32) -> &'static str {
    chrono::Month::try_from((index.min(11) + 1) as u8)
        .map(|m| m.name())
        .unwrap_or("January")
}

/// The user's current selections plus the held prediction.
///
/// Any selection change discards the held result; the `stale` flag
/// records that a result existed before the change so the UI can say
/// "run again to refresh".
#[derive(Debug, Clone)]
pub struct InputState {
    coordinates: Option<Coordinates>,
    month_index: u32,
    state_code: String,
    result: Option<PredictionResult>,
    stale: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            coordinates: None,
            month_index: DEFAULT_MONTH_INDEX,
            state_code: String::new(),
            result: None,
            stale: false,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// 0-based month index (0 = January). 1-indexed at the wire.
    pub fn month_index(&self) -> u32 {
        self.month_index
    }

    /// Selected state code; empty string means unselected.
    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn has_prediction(&self) -> bool {
        self.result.is_some()
    }

    /// True once a selection changed while a result was held.
    pub fn stale(&self) -> bool {
        self.stale
    }

    /// Submission is possible iff a state and a location are selected;
    /// the month always has a default and never blocks.
    pub fn ready_to_submit(&self) -> bool {
        !self.state_code.is_empty() && self.coordinates.is_some()
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.invalidate();
        self.coordinates = Some(coordinates);
    }

    pub fn set_month_index(&mut self, index: u32) {
        self.invalidate();
        self.month_index = index.min(11);
    }

    pub fn set_state_code(&mut self, code: impl Into<String>) {
        let code = code.into();
        if !code.is_empty() && !is_state_code(&code) {
            log::warn!("unrecognized state code selected: {}", code);
        }
        self.invalidate();
        self.state_code = code;
    }

    /// Store a freshly normalized result; selections are current again.
    pub fn store_result(&mut self, result: PredictionResult) {
        self.result = Some(result);
        self.stale = false;
    }

    /// Discard the held result without marking the inputs stale.
    /// Used when a new submission begins or a request fails.
    pub fn discard_result(&mut self) {
        self.result = None;
        self.stale = false;
    }

    fn invalidate(&mut self) {
        if self.result.is_some() {
            self.stale = true;
        }
        self.result = None;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfp_model::prediction::PredictionResult;

    fn some_result() -> PredictionResult {
        PredictionResult {
            causes: Vec::new(),
            size: None,
        }
    }

    #[test]
    fn starts_with_january_and_nothing_selected() {
        let input = InputState::new();
        assert_eq!(input.month_index(), DEFAULT_MONTH_INDEX);
        assert_eq!(input.state_code(), "");
        assert!(input.coordinates().is_none());
        assert!(!input.ready_to_submit());
        assert!(!input.stale());
    }

    #[test]
    fn ready_needs_state_and_location_but_not_month() {
        let mut input = InputState::new();
        input.set_state_code("CA");
        assert!(!input.ready_to_submit());
        input.set_coordinates(Coordinates::new(38.5, -121.5).unwrap());
        assert!(input.ready_to_submit());
    }

    #[test]
    fn selection_change_clears_result_and_marks_stale() {
        let mut input = InputState::new();
        input.store_result(some_result());
        assert!(input.has_prediction());

        input.set_month_index(5);
        assert!(!input.has_prediction());
        assert!(input.stale());
    }

    #[test]
    fn each_selection_setter_invalidates() {
        let setters: [fn(&mut InputState); 3] = [
            |i| i.set_month_index(3),
            |i| i.set_state_code("OR"),
            |i| i.set_coordinates(Coordinates::new(44.0, -120.5).unwrap()),
        ];
        for setter in setters {
            let mut input = InputState::new();
            input.store_result(some_result());
            setter(&mut input);
            assert!(!input.has_prediction());
            assert!(input.stale());
        }
    }

    #[test]
    fn changes_without_a_result_are_not_stale() {
        let mut input = InputState::new();
        input.set_state_code("WA");
        input.set_month_index(7);
        assert!(!input.stale());
    }

    #[test]
    fn storing_a_result_clears_staleness() {
        let mut input = InputState::new();
        input.store_result(some_result());
        input.set_state_code("NV");
        assert!(input.stale());
        input.store_result(some_result());
        assert!(!input.stale());
    }

    #[test]
    fn month_labels_from_index() {
        assert_eq!(month_label(0), "January");
        assert_eq!(month_label(11), "December");
    }
}
