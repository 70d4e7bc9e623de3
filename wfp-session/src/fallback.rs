//! Placeholder substitution producing the final display model.
//!
//! Placeholders keep the dashboard populated before the first
//! prediction and whenever the endpoint returns no usable data. They
//! are injected as named configuration so tests can substitute them.

use serde::Serialize;
use wfp_model::prediction::{CauseEstimate, PredictionResult, SizeEstimate};

/// Static size placeholder triple, in acres.
pub const PLACEHOLDER_EXPECTED_ACRES: f64 = 3807.0;
pub const PLACEHOLDER_MIN_ACRES: f64 = 2284.0;
pub const PLACEHOLDER_MAX_ACRES: f64 = 5711.0;

/// Static cause list shown when normalization yields no causes.
pub const PLACEHOLDER_CAUSES: [(&str, f64); 4] = [
    ("Lightning", 0.32),
    ("Debris Burning", 0.24),
    ("Equipment Use", 0.18),
    ("Arson", 0.11),
];

/// The placeholder values FallbackResolver substitutes for absent data.
#[derive(Debug, Clone)]
pub struct Placeholders {
    pub size: SizeEstimate,
    pub causes: Vec<CauseEstimate>,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            size: SizeEstimate {
                expected_acres: Some(PLACEHOLDER_EXPECTED_ACRES),
                min_acres: Some(PLACEHOLDER_MIN_ACRES),
                max_acres: Some(PLACEHOLDER_MAX_ACRES),
            },
            causes: PLACEHOLDER_CAUSES
                .iter()
                .map(|(label, probability)| CauseEstimate {
                    label: (*label).to_string(),
                    probability: *probability,
                    expected_acres: None,
                    min_acres: None,
                    max_acres: None,
                })
                .collect(),
        }
    }
}

/// Every value the dashboard renders, with placeholder provenance so
/// illustrative values can be annotated as such.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedDisplay {
    pub causes: Vec<CauseEstimate>,
    /// True when `causes` is the static placeholder list.
    pub causes_placeholder: bool,
    pub size: SizeEstimate,
    /// True when `size` is the static placeholder triple.
    pub size_placeholder: bool,
}

/// Merge a (possibly absent) normalized result with the placeholders.
///
/// The cause list is all-real or all-placeholder, never blended per
/// field; individual real causes may still carry null acreage. The
/// size triple comes either whole from the normalized result or whole
/// from the placeholder.
pub fn resolve_display(
    result: Option<&PredictionResult>,
    placeholders: &Placeholders,
) -> ResolvedDisplay {
    let real_causes = result.map(|r| r.causes.as_slice()).unwrap_or(&[]);
    let (causes, causes_placeholder) = if real_causes.is_empty() {
        (placeholders.causes.clone(), true)
    } else {
        (real_causes.to_vec(), false)
    };

    let (size, size_placeholder) = match result.and_then(|r| r.size) {
        Some(size) => (size, false),
        None => (placeholders.size, true),
    };

    ResolvedDisplay {
        causes,
        causes_placeholder,
        size,
        size_placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real_result() -> PredictionResult {
        PredictionResult {
            causes: vec![CauseEstimate {
                label: "Lightning".to_string(),
                probability: 0.6,
                expected_acres: None,
                min_acres: None,
                max_acres: None,
            }],
            size: Some(SizeEstimate {
                expected_acres: Some(4000.0),
                min_acres: Some(2500.0),
                max_acres: Some(6000.0),
            }),
        }
    }

    #[test]
    fn no_result_yields_all_placeholders() {
        let display = resolve_display(None, &Placeholders::default());
        assert!(display.causes_placeholder);
        assert!(display.size_placeholder);
        assert_eq!(display.causes.len(), 4);
        assert_eq!(display.causes[0].label, "Lightning");
        assert_eq!(display.size.expected_acres, Some(PLACEHOLDER_EXPECTED_ACRES));
        assert_eq!(display.size.min_acres, Some(PLACEHOLDER_MIN_ACRES));
        assert_eq!(display.size.max_acres, Some(PLACEHOLDER_MAX_ACRES));
    }

    #[test]
    fn real_result_bypasses_placeholders() {
        let result = real_result();
        let display = resolve_display(Some(&result), &Placeholders::default());
        assert!(!display.causes_placeholder);
        assert!(!display.size_placeholder);
        assert_eq!(display.causes.len(), 1);
        assert_eq!(display.size.expected_acres, Some(4000.0));
    }

    #[test]
    fn empty_causes_with_real_size_mixes_provenance() {
        // Placeholder causes alongside a real size triple is the one
        // legitimate mixed display.
        let result = PredictionResult {
            causes: Vec::new(),
            size: Some(SizeEstimate {
                expected_acres: Some(350.5),
                min_acres: None,
                max_acres: None,
            }),
        };
        let display = resolve_display(Some(&result), &Placeholders::default());
        assert!(display.causes_placeholder);
        assert!(!display.size_placeholder);
        assert_eq!(display.size.expected_acres, Some(350.5));
        // Partial real triples are never topped up from the placeholder.
        assert_eq!(display.size.min_acres, None);
    }

    #[test]
    fn substituted_placeholders_flow_through() {
        let placeholders = Placeholders {
            size: SizeEstimate {
                expected_acres: Some(1.0),
                min_acres: Some(0.5),
                max_acres: Some(2.0),
            },
            causes: vec![CauseEstimate {
                label: "Test".to_string(),
                probability: 0.5,
                expected_acres: None,
                min_acres: None,
                max_acres: None,
            }],
        };
        let display = resolve_display(None, &placeholders);
        assert_eq!(display.causes[0].label, "Test");
        assert_eq!(display.size.expected_acres, Some(1.0));
    }
}
