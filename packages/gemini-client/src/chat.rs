//! Generative model handles and chat sessions.
//!
//! A chat session is seeded with prior turns and then sent one message at a
//! time. Every send replays the full history in a single `generateContent`
//! call; the API itself is stateless.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{Content, GeminiClient, GenerationConfig};
//!
//! let model = client
//!     .model("gemini-1.5-flash")
//!     .generation_config(GenerationConfig::new().temperature(1.0))
//!     .build();
//!
//! let mut chat = model.start_chat(vec![Content::user(prompt)]);
//! let reply = chat.send_message("What is chapter 2 about?").await?;
//! ```

use crate::{Content, GeminiClient, GenerateContentRequest, GenerateResponse, GenerationConfig, Result};
use tracing::debug;

/// Builder for creating a [`GenerativeModel`].
pub struct ModelBuilder<'a> {
    client: &'a GeminiClient,
    model: String,
    generation_config: Option<GenerationConfig>,
}

impl<'a> ModelBuilder<'a> {
    pub(crate) fn new(client: &'a GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            generation_config: None,
        }
    }

    /// Set the generation config sent with every request.
    ///
    /// Without one the model's server-side defaults apply.
    pub fn generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }

    /// Build the model handle.
    pub fn build(self) -> GenerativeModel<'a> {
        GenerativeModel {
            client: self.client,
            model: self.model,
            generation_config: self.generation_config,
        }
    }
}

/// A named model plus the settings to call it with.
pub struct GenerativeModel<'a> {
    client: &'a GeminiClient,
    model: String,
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerativeModel<'a> {
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Start a chat seeded with `history`.
    pub fn start_chat(&self, history: Vec<Content>) -> ChatSession<'a> {
        ChatSession {
            client: self.client,
            model: self.model.clone(),
            generation_config: self.generation_config.clone(),
            history,
        }
    }
}

/// A chat in progress.
pub struct ChatSession<'a> {
    client: &'a GeminiClient,
    model: String,
    generation_config: Option<GenerationConfig>,
    history: Vec<Content>,
}

impl<'a> ChatSession<'a> {
    /// Turns exchanged so far, including the seed history.
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send a user message and wait for the model's reply.
    ///
    /// On success the message and the reply are appended to the history.
    /// On failure the history is left as it was.
    pub async fn send_message(&mut self, text: impl Into<String>) -> Result<GenerateResponse> {
        let message = Content::user(text);

        let mut contents = self.history.clone();
        contents.push(message.clone());

        debug!(
            model = %self.model,
            turn_count = contents.len(),
            "Sending chat message"
        );

        let request = GenerateContentRequest {
            contents,
            generation_config: self.generation_config.clone(),
        };
        let response = self.client.generate_content(&self.model, &request).await?;

        self.history.push(message);
        self.history.push(Content::model(response.text.clone()));

        Ok(response)
    }
}
