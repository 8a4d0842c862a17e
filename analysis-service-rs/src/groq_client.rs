// analysis-service-rs/src/groq_client.rs
// HTTP client for the Groq OpenAI-compatible chat-completions API
//
// Configuration (.env file):
// - GROQ_API_KEY: API key for the provider (required for calls to succeed)
// - GROQ_API_URL: chat-completions endpoint (defaults to Groq's hosted API)
// - GROQ_MODEL: model identifier (defaults to "llama-3.3-70b-versatile")

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

// Sampling parameters are part of the endpoint contract and never vary per request.
const TEMPERATURE: f32 = 0.5;
const TOP_P: f32 = 0.85;
const PRESENCE_PENALTY: f32 = 0.6;
const FREQUENCY_PENALTY: f32 = 0.6;

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u32,
}

/// Errors from a single completion attempt. The endpoint maps every variant
/// to the same fixed client-facing message; the variants exist for the log.
#[derive(Debug, Error)]
pub enum GroqError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("network error calling completion API: {0}")]
    Network(reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Client for the external completion provider.
///
/// Constructed once at startup and shared read-only across request handlers;
/// configuration is never re-read per request.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GroqClient {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build the client from process environment.
    ///
    /// A missing API key is reported when a call is attempted, not here, so
    /// the service still starts (degraded) without one.
    pub fn from_env() -> Self {
        let api_url = env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let api_key = env::var("GROQ_API_KEY").unwrap_or_default();

        if api_key.is_empty() {
            log::warn!("GROQ_API_KEY is not set; analysis calls will fail");
        }

        Self::new(api_url, api_key, model)
    }

    /// Check whether the provider API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send one two-message completion request and return the generated text.
    ///
    /// Exactly one outbound call per invocation: no streaming, no retries,
    /// and no timeout beyond the transport default.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, GroqError> {
        if self.api_key.is_empty() {
            return Err(GroqError::MissingApiKey);
        }

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        };

        log::debug!(
            "sending completion request to {} (model: {})",
            self.api_url,
            self.model
        );

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(GroqError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GroqError::Api { status, body });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GroqError::MalformedResponse(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            log::debug!("completion used {} tokens", usage.total_tokens);
        }

        match completion.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(GroqError::MalformedResponse(
                "no choices returned in response".to_string(),
            )),
        }
    }
}
