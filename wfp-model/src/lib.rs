//! Core types and prediction API plumbing for the wildfire dashboard.
//!
//! This crate is the normalization boundary between the remote
//! model-serving endpoint and the dashboard view-model:
//! - `geo`: coordinates and US state/territory codes
//! - `prediction`: the canonical `PredictionResult` and its parts
//! - `normalize`: raw JSON response -> canonical result, tolerating
//!   every response shape the endpoint has historically produced
//! - `request`: request payload, error taxonomy, and the shared
//!   HTTP outcome classifier
//! - `api` (feature `api`): native `reqwest` client, kept out of
//!   WASM builds

pub mod geo;
pub mod normalize;
pub mod prediction;
pub mod request;

#[cfg(feature = "api")]
pub mod api;
