//! Raw endpoint response -> canonical [`PredictionResult`].
//!
//! The prediction endpoint has shipped at least three incompatible
//! response layouts over its history:
//! - `{ "cause": { "probabilities": [...] } }` or a flat
//!   `{ "cause_probabilities": [...] }`, with size in a `"size"` object
//!   or flat `predicted_size_acres`/`size_min_acres`/`size_max_acres`
//! - `{ "sizes_by_cause": [...] }` where every cause entry carries its
//!   own acreage triple
//! - the minimal `{ "predicted_cause", "predicted_size_acres" }` pair,
//!   which has no per-cause probabilities at all
//!
//! Normalization is a pure function over the parsed JSON so it can be
//! unit-tested without any network or rendering dependency.

use serde_json::Value;

use crate::prediction::{CauseEstimate, PredictionResult, SizeEstimate, MAX_VISIBLE_CAUSES};

/// Label used when a cause entry carries neither `label` nor `cause`.
pub const UNLABELED_CAUSE: &str = "Unlabeled cause";

/// Normalize an arbitrary response object into the canonical model.
///
/// Accepts anything; an empty or unrecognized object normalizes to an
/// empty cause list and no size estimate, which downstream display
/// resolves to placeholders.
pub fn normalize(raw: &Value) -> PredictionResult {
    let mut causes = Vec::new();
    for entry in cause_source(raw) {
        let probability = resolve_probability(entry);
        // Zero-score entries are noise from the classifier; drop them
        // before the top-4 cut so real causes are not crowded out.
        if probability == 0.0 {
            continue;
        }
        causes.push(CauseEstimate {
            label: resolve_label(entry),
            probability,
            expected_acres: numeric_field(entry, "expected_acres"),
            min_acres: numeric_field(entry, "min_acres"),
            max_acres: numeric_field(entry, "max_acres"),
        });
    }
    // Input order is a ranking signal from the backend; never re-sort.
    causes.truncate(MAX_VISIBLE_CAUSES);

    let size = resolve_size(raw, &causes);
    if let Some(size) = &size {
        if !size.is_ordered() {
            log::warn!(
                "size estimate out of order: min={:?} expected={:?} max={:?}",
                size.min_acres,
                size.expected_acres,
                size.max_acres
            );
        }
    }

    PredictionResult { causes, size }
}

/// Pick the cause source: a non-empty `sizes_by_cause` wins, otherwise
/// `cause.probabilities` / `cause_probabilities`.
fn cause_source(raw: &Value) -> &[Value] {
    if let Some(entries) = raw.get("sizes_by_cause").and_then(Value::as_array) {
        if !entries.is_empty() {
            return entries;
        }
    }
    raw.get("cause")
        .and_then(|c| c.get("probabilities"))
        .or_else(|| raw.get("cause_probabilities"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Resolve a probability fraction for one raw entry.
///
/// `probability` is taken as-is when numeric; otherwise `value` is
/// treated as a 0-100 percentage. Either way the result is clamped
/// to [0,1].
fn resolve_probability(entry: &Value) -> f64 {
    let fraction = if let Some(p) = entry.get("probability").and_then(Value::as_f64) {
        p
    } else if let Some(v) = entry.get("value").and_then(Value::as_f64) {
        v / 100.0
    } else {
        0.0
    };
    fraction.clamp(0.0, 1.0)
}

fn resolve_label(entry: &Value) -> String {
    entry
        .get("label")
        .or_else(|| entry.get("cause"))
        .and_then(Value::as_str)
        .unwrap_or(UNLABELED_CAUSE)
        .to_string()
}

fn numeric_field(entry: &Value, key: &str) -> Option<f64> {
    entry.get(key).and_then(Value::as_f64)
}

/// Resolve the size estimate from the ordered source chain:
/// explicit `size` object, legacy flat fields, then the top cause's
/// embedded acres. Each source yields the whole triple or nothing.
fn resolve_size(raw: &Value, causes: &[CauseEstimate]) -> Option<SizeEstimate> {
    if let Some(size) = raw.get("size").filter(|s| s.is_object()) {
        let explicit = SizeEstimate {
            expected_acres: numeric_field(size, "expected_acres"),
            min_acres: numeric_field(size, "min_acres"),
            max_acres: numeric_field(size, "max_acres"),
        };
        if explicit.has_value() {
            return Some(explicit);
        }
    }

    let legacy = SizeEstimate {
        expected_acres: raw.get("predicted_size_acres").and_then(Value::as_f64),
        min_acres: raw.get("size_min_acres").and_then(Value::as_f64),
        max_acres: raw.get("size_max_acres").and_then(Value::as_f64),
    };
    if legacy.has_value() {
        return Some(legacy);
    }

    let top = causes.first().filter(|c| c.has_size())?;
    Some(SizeEstimate {
        expected_acres: top.expected_acres,
        min_acres: top.min_acres,
        max_acres: top.max_acres,
    })
}
