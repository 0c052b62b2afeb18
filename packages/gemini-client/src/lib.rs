//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` endpoint with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{Content, GeminiClient};
//!
//! let client = GeminiClient::from_env()?;
//!
//! let model = client.model("gemini-1.5-flash").build();
//! let mut chat = model.start_chat(vec![Content::user("Here is some context...")]);
//! let reply = chat.send_message("Summarize it.").await?;
//!
//! if reply.is_content_policy_rejection() {
//!     // the candidate was withheld
//! }
//! ```

pub mod chat;
pub mod error;
pub mod types;

pub use chat::{ChatSession, GenerativeModel, ModelBuilder};
pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, regional endpoints, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured HTTP client (timeouts, proxies).
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a model builder for the named model.
    pub fn model(&self, model: impl Into<String>) -> ModelBuilder<'_> {
        ModelBuilder::new(self, model)
    }

    /// Raw `generateContent` call.
    ///
    /// Returns the first candidate's text. A candidate withheld by a content
    /// filter is not an error: it comes back with empty text and its finish
    /// or block reason set, see [`GenerateResponse::is_content_policy_rejection`].
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<types::ApiErrorRaw>(&error_text) {
                Ok(raw) if !raw.error.status.is_empty() => {
                    format!("{} ({})", raw.error.message, raw.error.status)
                }
                Ok(raw) => raw.error.message,
                Err(_) => error_text,
            };
            warn!(status = %status, error = %message, "Gemini API error");
            return Err(GeminiError::Api(format!("Gemini API error {}: {}", status, message)));
        }

        let raw: types::GenerateContentResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let block_reason = raw.prompt_feedback.and_then(|f| f.block_reason);

        let parsed = match raw.candidates.into_iter().next() {
            Some(candidate) => GenerateResponse {
                text: candidate.content.map(|c| c.text()).unwrap_or_default(),
                finish_reason: candidate.finish_reason,
                block_reason,
                usage: raw.usage_metadata,
            },
            None if block_reason.is_some() => GenerateResponse {
                text: String::new(),
                finish_reason: None,
                block_reason,
                usage: raw.usage_metadata,
            },
            None => return Err(GeminiError::Api("No candidates from Gemini".into())),
        };

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            finish_reason = ?parsed.finish_reason,
            response_len = parsed.text.len(),
            "Gemini generateContent"
        );

        Ok(parsed)
    }
}
