//! Native HTTP client for the prediction endpoint (feature `api`).
//!
//! Used by the CLI; the WASM dashboard has its own `web-sys` fetch path.
//! Both feed [`crate::request::response_outcome`] so the browser and
//! native behavior stay identical.

use serde_json::Value;

use crate::request::{
    response_outcome, transport_error, PredictError, PredictRequest, DEFAULT_API_URL, PREDICT_PATH,
};

/// Environment variable selecting the endpoint base URL.
pub const API_URL_ENV: &str = "WFP_API_URL";

/// Resolve the base URL from the environment, defaulting to localhost.
pub fn base_url_from_env() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Client for `POST /predict`.
///
/// No explicit timeout is set; the call waits on the transport's own
/// behavior.
pub struct PredictClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one prediction request and classify the outcome.
    pub async fn predict(&self, request: &PredictRequest) -> Result<Value, PredictError> {
        let url = format!("{}{}", self.base_url, PREDICT_PATH);
        log::info!(
            "POST {} (month={}, state={})",
            url,
            request.month,
            request.state
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or("").to_string();
        // A body that cannot be read behaves like an empty one.
        let body = response.text().await.unwrap_or_default();

        response_outcome(status.as_u16(), &status_text, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_stripped_from_base_url() {
        let client = PredictClient::new("http://example.com/");
        assert_eq!(client.base_url(), "http://example.com");
    }
}
