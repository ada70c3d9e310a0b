//! Reqwest client for the hosted (Groq, OpenAI-compatible) completion API.

use crate::chat::{ChatModel, ChatRequest};
use crate::error::EnrichError;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama3-70b-8192";
/// Default request timeout. The upstream call is the only meaningful
/// suspension point in a request, so it never runs unbounded.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fixed sampling temperature for enrichment calls.
const TEMPERATURE: f64 = 0.5;

/// Client for the hosted chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Create a client with default endpoint, model, and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, EnrichError> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT)
    }

    /// Create a client with explicit endpoint, model, and timeout.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EnrichError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| EnrichError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn chat_json(&self, request: &ChatRequest) -> Result<String, EnrichError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user},
            ],
            "response_format": {"type": "json_object"},
            "temperature": TEMPERATURE,
        });

        debug!("posting completion request (model={})", self.model);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| EnrichError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EnrichError::Transport(format!(
                "completion endpoint returned {status}: {detail}"
            )));
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|err| EnrichError::Transport(err.to_string()))?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| EnrichError::Transport("completion reply had no content".to_string()))
    }
}
