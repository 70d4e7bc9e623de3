//! Parsing for the embedded illustrative chart series.
//!
//! `predict-dashboard`'s build script aggregates the fixture CSV into
//! `month_index,total` lines (1-indexed months, no header) embedded via
//! `include_str!`. This module turns that text into labeled points for
//! the D3 bar chart.

use serde::Serialize;
use wfp_session::input::month_label;

/// A single (month, value) pair used for bar chart data points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthCount {
    /// Month display name (e.g. "July").
    pub month: String,
    /// Fire count for that month across the fixture.
    pub value: f64,
}

/// Parse `month_index,total` lines; malformed lines are skipped.
pub fn parse_month_counts(text: &str) -> Vec<MonthCount> {
    let mut counts = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ',');
        let month: u32 = match parts.next().and_then(|m| m.trim().parse().ok()) {
            Some(m) if (1..=12).contains(&m) => m,
            _ => continue,
        };
        let value: f64 = match parts.next().and_then(|v| v.trim().parse().ok()) {
            Some(v) => v,
            None => continue,
        };
        counts.push(MonthCount {
            month: month_label(month - 1).to_string(),
            value,
        });
    }
    counts
}
