// Chat model implementation using Gemini
//
// This is the infrastructure implementation of BaseChatModel.
// Business logic (what to prompt for) lives in domain layers.

use async_trait::async_trait;
use gemini_client::{truncate_to_char_boundary, Content, GeminiClient};

use super::{BaseChatModel, OneTurnRequest, RemoteCallError};

/// Prompts above this size are still sent as-is, but logged.
const LARGE_PROMPT_BYTES: usize = 1_000_000;

/// Gemini implementation of the chat model
#[derive(Clone)]
pub struct GeminiChatModel {
    client: GeminiClient,
    model: String,
}

impl GeminiChatModel {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseChatModel for GeminiChatModel {
    async fn one_turn(&self, request: OneTurnRequest) -> Result<String, RemoteCallError> {
        let OneTurnRequest {
            history_prompt,
            message,
            generation_config,
        } = request;

        let prompt_length = history_prompt.len();
        if prompt_length > LARGE_PROMPT_BYTES {
            tracing::warn!(
                prompt_length,
                model = %self.model,
                "Prompt is very large; sending without truncation"
            );
        }
        let prompt_preview = truncate_to_char_boundary(&history_prompt, 200).to_string();

        let builder = self.client.model(&self.model);
        let model = match generation_config {
            Some(config) => builder.generation_config(config),
            None => builder,
        }
        .build();

        let mut chat = model.start_chat(vec![Content::user(history_prompt)]);

        tracing::info!(model = %self.model, prompt_length, "Calling Gemini API");

        let response = chat.send_message(message).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                prompt_preview = %prompt_preview,
                "Gemini API call failed"
            );
            RemoteCallError::Failed(e.to_string())
        })?;

        if let Some(reason) = response.rejection_reason() {
            tracing::warn!(model = %self.model, reason = %reason, "Gemini withheld the response");
            return Err(RemoteCallError::ContentPolicy { reason });
        }

        tracing::info!(
            response_length = response.text.len(),
            model = %self.model,
            "Gemini API response received"
        );

        Ok(response.text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
