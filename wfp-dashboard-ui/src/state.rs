//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The session itself is framework-free;
//! `refresh` recomputes the derived display/status signals after any
//! mutation.

use dioxus::prelude::*;
use wfp_session::fallback::{Placeholders, ResolvedDisplay};
use wfp_session::session::PredictionSession;

/// Shared application state for the wildfire dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The prediction session (inputs, lifecycle, held result)
    pub session: Signal<PredictionSession>,
    /// Placeholder values substituted when no prediction data exists
    pub placeholders: Signal<Placeholders>,
    /// Everything the result panels render, derived from the session
    pub display: Signal<ResolvedDisplay>,
    /// Status banner text, derived from the session
    pub status: Signal<String>,
}

impl AppState {
    /// Create a new AppState with a fresh session and derived signals.
    pub fn new() -> Self {
        let session = PredictionSession::new();
        let placeholders = Placeholders::default();
        let display = session.display(&placeholders);
        let status = session.status_text(&placeholders);
        Self {
            session: Signal::new(session),
            placeholders: Signal::new(placeholders),
            display: Signal::new(display),
            status: Signal::new(status),
        }
    }

    /// Recompute the derived signals from the session.
    ///
    /// Call after every session mutation; components subscribe to
    /// `display`/`status` and redraw on change.
    pub fn refresh(&mut self) {
        let placeholders = self.placeholders.read().clone();
        let (display, status) = {
            let session = self.session.read();
            (
                session.display(&placeholders),
                session.status_text(&placeholders),
            )
        };
        self.display.set(display);
        self.status.set(status);
    }
}
