//! Server dependencies for request handlers (using traits for testability)
//!
//! All external services sit behind trait abstractions so tests can swap in
//! the mocks from `test_dependencies`.

use std::sync::Arc;

use crate::kernel::BaseChatModel;

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Remote model for every assistant action
    pub chat_model: Arc<dyn BaseChatModel>,
}

impl ServerDeps {
    pub fn new(chat_model: Arc<dyn BaseChatModel>) -> Self {
        Self { chat_model }
    }
}
