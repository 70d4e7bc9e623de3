//! Request payload, error taxonomy, and the HTTP outcome classifier
//! shared by the native and browser transports.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Path of the prediction endpoint, appended to the configured base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Default endpoint base URL for local development. Deployments select
/// another via the `WFP_API_URL` environment variable (runtime for the
/// CLI, compile-time for the WASM dashboard).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Message shown when an HTTP failure carries no usable detail.
pub const GENERIC_REQUEST_ERROR: &str = "Prediction request failed";

/// Message shown when the transport fails without a message of its own.
pub const GENERIC_TRANSPORT_ERROR: &str = "Could not reach the prediction service";

/// JSON body for `POST /predict`.
///
/// `month` is 1-indexed on the wire; the view-model holds a 0-based
/// index and converts at this boundary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictRequest {
    pub lat: f64,
    pub lon: f64,
    pub month: u32,
    pub state: String,
}

/// Errors a submission can surface. All are recoverable: the user
/// corrects input or simply retries.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Missing state or location, caught before any network call.
    Validation(String),
    /// Non-2xx HTTP response, with the best available detail.
    Request(String),
    /// Network-level failure: the request never completed.
    Transport(String),
}

impl PredictError {
    /// The human-readable message, regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            PredictError::Validation(msg)
            | PredictError::Request(msg)
            | PredictError::Transport(msg) => msg,
        }
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PredictError {}

/// Classify a completed HTTP exchange.
///
/// - 2xx with a parseable body: the parsed value.
/// - 2xx with an empty or unparseable body: an empty JSON object.
///   Malformed JSON on a success status is deliberately swallowed into
///   "no data" rather than surfaced as an error.
/// - Non-2xx: a `Request` error whose message comes from the body's
///   `detail` field, else the HTTP status text, else a generic string.
pub fn response_outcome(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Value, PredictError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new())));
    }

    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(String::from));

    let message = detail.unwrap_or_else(|| {
        if status_text.is_empty() {
            GENERIC_REQUEST_ERROR.to_string()
        } else {
            status_text.to_string()
        }
    });

    Err(PredictError::Request(message))
}

/// Map a transport-level failure message into the taxonomy, falling
/// back to the generic string when the underlying error is silent.
pub fn transport_error(message: impl Into<String>) -> PredictError {
    let message = message.into();
    if message.trim().is_empty() {
        PredictError::Transport(GENERIC_TRANSPORT_ERROR.to_string())
    } else {
        PredictError::Transport(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let req = PredictRequest {
            lat: 38.5,
            lon: -121.5,
            month: 7,
            state: "CA".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["lat"], 38.5);
        assert_eq!(json["lon"], -121.5);
        assert_eq!(json["month"], 7);
        assert_eq!(json["state"], "CA");
    }

    #[test]
    fn success_with_body_parses() {
        let value = response_outcome(200, "OK", r#"{"predicted_cause":"Lightning"}"#).unwrap();
        assert_eq!(value["predicted_cause"], "Lightning");
    }

    #[test]
    fn success_with_empty_body_is_empty_object() {
        let value = response_outcome(200, "OK", "").unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn success_with_malformed_body_is_empty_object() {
        // 2xx + garbage is "no data", never an error.
        let value = response_outcome(200, "OK", "{not json").unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn failure_uses_detail_field() {
        let err = response_outcome(404, "Not Found", r#"{"detail":"location out of coverage"}"#)
            .unwrap_err();
        assert_eq!(err, PredictError::Request("location out of coverage".into()));
    }

    #[test]
    fn failure_falls_back_to_status_text() {
        let err = response_outcome(500, "Internal Server Error", "oops").unwrap_err();
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn failure_falls_back_to_generic_message() {
        let err = response_outcome(503, "", "").unwrap_err();
        assert_eq!(err.message(), GENERIC_REQUEST_ERROR);
    }

    #[test]
    fn transport_error_keeps_message_or_falls_back() {
        assert_eq!(
            transport_error("connection refused").message(),
            "connection refused"
        );
        assert_eq!(transport_error("  ").message(), GENERIC_TRANSPORT_ERROR);
    }
}
