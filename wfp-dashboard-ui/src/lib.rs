//! Shared Dioxus components and D3.js bridge for the wildfire dashboard.
//!
//! This crate provides:
//! - `state`: reactive AppState wrapping the prediction session
//! - `net`: browser fetch plumbing for `POST /predict`
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chartdata`: parsing for the embedded illustrative chart series
//! - `format`: display formatting helpers
//! - `components`: reusable RSX components (selectors, banner, tables)

pub mod chartdata;
pub mod components;
pub mod format;
pub mod js_bridge;
pub mod net;
pub mod state;
