//! Canonical prediction model produced by normalization.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Maximum number of cause entries shown to the user ("top 4 causes").
///
/// Applied during normalization so every consumer sees the same list.
pub const MAX_VISIBLE_CAUSES: usize = 4;

/// A single wildfire-cause estimate.
///
/// Probabilities are independent per-cause scores; the classifier may
/// emit raw scores rather than a distribution, so they are not required
/// to sum to 1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CauseEstimate {
    /// Human-readable cause label (e.g. "Lightning").
    pub label: String,
    /// Score in [0,1], clamped during normalization.
    pub probability: f64,
    /// Expected burned area in acres, when the entry carries one.
    pub expected_acres: Option<f64>,
    /// Lower acreage bound, when the entry carries one.
    pub min_acres: Option<f64>,
    /// Upper acreage bound, when the entry carries one.
    pub max_acres: Option<f64>,
}

impl CauseEstimate {
    /// True when this entry carries at least one acreage field.
    pub fn has_size(&self) -> bool {
        self.expected_acres.is_some() || self.min_acres.is_some() || self.max_acres.is_some()
    }
}

/// An expected/min/max acreage triple describing predicted fire extent.
///
/// The whole triple always comes from exactly one response source;
/// missing fields stay `None` rather than being backfilled.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SizeEstimate {
    pub expected_acres: Option<f64>,
    pub min_acres: Option<f64>,
    pub max_acres: Option<f64>,
}

impl SizeEstimate {
    /// True when at least one field is present.
    pub fn has_value(&self) -> bool {
        self.expected_acres.is_some() || self.min_acres.is_some() || self.max_acres.is_some()
    }

    /// Check the `min <= expected <= max` ordering when all three are
    /// present. The endpoint does not enforce this, so normalization
    /// logs a warning instead of rejecting the triple.
    pub fn is_ordered(&self) -> bool {
        match (self.min_acres, self.expected_acres, self.max_acres) {
            (Some(min), Some(expected), Some(max)) => min <= expected && expected <= max,
            _ => true,
        }
    }
}

/// The canonical, post-normalization prediction.
///
/// `causes` preserves endpoint order (a ranking signal) and is already
/// truncated to [`MAX_VISIBLE_CAUSES`]. `size` is `None` when no
/// response source yielded an acreage triple.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionResult {
    pub causes: Vec<CauseEstimate>,
    pub size: Option<SizeEstimate>,
}
