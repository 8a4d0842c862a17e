// analysis-client-rs/src/client.rs
// Typed HTTP client for the analysis endpoint

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Analyze request body (JSON)
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub goal: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
struct ResultBody {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Errors from a single submission. The form controller folds every variant
/// into one generic user-facing message; the variants exist for the log.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error calling analysis endpoint: {0}")]
    Network(reqwest::Error),

    #[error("analysis endpoint returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("malformed response from analysis endpoint: {0}")]
    Malformed(String),
}

/// Client for the Analysis Service HTTP API.
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the service address from standard configuration.
    pub fn from_env() -> Self {
        Self::new(config_rs::get_client_address("ANALYSIS", 8080, None))
    }

    /// Submit one analysis request and return the generated text.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, ClientError> {
        let url = format!("{}/api/analyze", self.base_url);
        log::debug!("submitting analysis request to {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the endpoint's error body; fall back to the bare status
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("status {}", status),
            };
            return Err(ClientError::Api { status, message });
        }

        let body: ResultBody = response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))?;

        Ok(body.result)
    }
}
