/// LLM Client — the single point of entry for all model calls in the planner.
///
/// ARCHITECTURAL RULE: No other module may talk to the model backend directly.
/// All completions MUST go through the `TextCompletion` trait, so the pipeline
/// is testable against deterministic stubs instead of a live model.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned empty content")]
    EmptyContent,
}

/// A single-shot text-completion capability: one prompt in, one blob of text
/// out. No streaming, no conversation state across calls.
///
/// Held as `Arc<dyn TextCompletion>` in `AppState`; tests swap in stubs.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// `TextCompletion` backed by a local Ollama server's `/api/generate` endpoint.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            model,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextCompletion for OllamaClient {
    /// Makes exactly one call per invocation. A failed stage is reported to
    /// the caller rather than retried; the pipeline restarts from stage 1.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: OllamaGenerateResponse = response.json().await?;

        debug!(
            "completion succeeded: {} chars, model={}",
            body.response.len(),
            self.model
        );

        if body.response.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        Ok(body.response)
    }
}
