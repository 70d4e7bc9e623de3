//! Browser fetch plumbing for the prediction endpoint.
//!
//! Issues `POST /predict` through the `web-sys` fetch API and feeds the
//! completed exchange into the shared outcome classifier so the browser
//! behaves exactly like the native client.

use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use wfp_model::request::{
    response_outcome, transport_error, PredictError, PredictRequest, PREDICT_PATH,
};

/// POST one prediction request from the browser.
///
/// Transport-level failures (fetch rejection, no window, unreadable
/// response object) map to `PredictError::Transport`; HTTP status
/// classification is shared with the native path.
pub async fn post_predict(
    base_url: &str,
    request: &PredictRequest,
) -> Result<Value, PredictError> {
    let body = serde_json::to_string(request).map_err(|e| transport_error(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let url = format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH);
    let http_request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| transport_error(js_message(&e)))?;
    http_request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| transport_error(js_message(&e)))?;

    let window = web_sys::window().ok_or_else(|| transport_error("no window available"))?;
    let response = JsFuture::from(window.fetch_with_request(&http_request))
        .await
        .map_err(|e| transport_error(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| transport_error(js_message(&e)))?;

    // An unreadable body behaves like an empty one.
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    response_outcome(response.status(), &response.status_text(), &text)
}

/// Best-effort human-readable message from a JS error value.
fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
