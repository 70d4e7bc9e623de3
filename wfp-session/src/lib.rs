//! The prediction view-model.
//!
//! Everything here is plain data with pure transition functions; the
//! rendering layer (Dioxus or CLI) is a subscriber that redraws on
//! state change, keeping the state machine framework-independent.
//!
//! - `input`: user selections and result invalidation
//! - `lifecycle`: the single-in-flight request state machine
//! - `fallback`: placeholder substitution for the display model
//! - `status`: human-readable banner text
//! - `session`: facade tying the pieces together

pub mod fallback;
pub mod input;
pub mod lifecycle;
pub mod session;
pub mod status;
