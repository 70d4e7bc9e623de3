//! Latitude/longitude inputs for picking the prediction location.

use crate::state::AppState;
use dioxus::prelude::*;
use wfp_model::geo::Coordinates;

/// Numeric lat/lng entry. The session only receives a location once
/// both fields parse and pass range validation; until then the previous
/// pick (if any) stays captured.
#[component]
pub fn LocationPicker() -> Element {
    let mut state = use_context::<AppState>();
    let mut lat_text = use_signal(String::new);
    let mut lng_text = use_signal(String::new);
    let mut invalid = use_signal(|| false);

    let mut apply = move || {
        let parsed = lat_text
            .read()
            .trim()
            .parse::<f64>()
            .ok()
            .zip(lng_text.read().trim().parse::<f64>().ok());
        match parsed.and_then(|(lat, lng)| Coordinates::new(lat, lng)) {
            Some(coordinates) => {
                invalid.set(false);
                state.session.write().set_coordinates(coordinates);
                state.refresh();
            }
            None => {
                // Partial entry is not an error worth shouting about;
                // only flag it once both fields hold something.
                let both_filled =
                    !lat_text.read().trim().is_empty() && !lng_text.read().trim().is_empty();
                invalid.set(both_filled);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Latitude: "
                input {
                    r#type: "number",
                    step: "0.0001",
                    min: "-90",
                    max: "90",
                    value: "{lat_text}",
                    style: "width: 110px;",
                    onchange: move |evt: Event<FormData>| {
                        lat_text.set(evt.value());
                        apply();
                    },
                }
            }
            label {
                style: "font-weight: bold;",
                "Longitude: "
                input {
                    r#type: "number",
                    step: "0.0001",
                    min: "-180",
                    max: "180",
                    value: "{lng_text}",
                    style: "width: 110px;",
                    onchange: move |evt: Event<FormData>| {
                        lng_text.set(evt.value());
                        apply();
                    },
                }
            }
            if invalid() {
                span {
                    style: "color: #C62828; font-size: 12px;",
                    "Latitude must be -90..90 and longitude -180..180."
                }
            }
        }
    }
}
