// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (what to prompt for) lives in domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseChatModel)

use async_trait::async_trait;
use gemini_client::GenerationConfig;
use thiserror::Error;

// =============================================================================
// Chat Model Trait (Infrastructure - one-turn LLM conversations)
// =============================================================================

/// Failure of a remote model call.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// Network, auth, quota or malformed-response failure
    #[error("{0}")]
    Failed(String),

    /// The service answered but withheld the content (safety, recitation, ...)
    #[error("response withheld by content policy ({reason})")]
    ContentPolicy { reason: String },
}

/// A fresh, stateless conversation: `history_prompt` is the only prior turn,
/// then `message` is sent and the reply text returned.
#[derive(Debug, Clone)]
pub struct OneTurnRequest {
    pub history_prompt: String,
    pub message: String,
    /// `None` uses the model's server-side defaults
    pub generation_config: Option<GenerationConfig>,
}

#[async_trait]
pub trait BaseChatModel: Send + Sync {
    /// Run one request/response round-trip against the model.
    async fn one_turn(&self, request: OneTurnRequest) -> Result<String, RemoteCallError>;

    /// Model identifier, for logs and health output.
    fn model_name(&self) -> &str;
}
