//! Coordinates and the US state/territory code table.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair captured from a single map interaction.
///
/// Construction validates the ranges; an existing value is immutable
/// until replaced by a new pick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Build coordinates, rejecting values outside [-90,90] / [-180,180].
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }
}

/// Two-letter codes accepted by the prediction endpoint:
/// the 50 states plus DC and Puerto Rico.
pub const US_STATE_CODES: &[&str] = &[
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL",
    "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE",
    "NH", "NJ", "NM", "NV", "NY", "OH", "OK", "OR", "PA", "PR", "RI", "SC", "SD", "TN", "TX",
    "UT", "VA", "VT", "WA", "WI", "WV", "WY",
];

/// Check whether a code belongs to the accepted state/territory set.
pub fn is_state_code(code: &str) -> bool {
    US_STATE_CODES.contains(&code)
}
