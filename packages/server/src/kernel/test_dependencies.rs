// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseChatModel, OneTurnRequest, RemoteCallError, ServerDeps};

// =============================================================================
// Mock Chat Model
// =============================================================================

/// A canned outcome for one model call.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Failure(String),
    Rejected(String),
}

pub struct MockChatModel {
    responses: Arc<Mutex<Vec<MockReply>>>,
    calls: Arc<Mutex<Vec<OneTurnRequest>>>,
}

impl MockChatModel {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, text: &str) -> Self {
        self.push(MockReply::Text(text.to_string()));
        self
    }

    /// Make the next call fail like a transport or service error
    pub fn with_failure(self, message: &str) -> Self {
        self.push(MockReply::Failure(message.to_string()));
        self
    }

    /// Make the next call come back withheld by a content filter
    pub fn with_rejection(self, reason: &str) -> Self {
        self.push(MockReply::Rejected(reason.to_string()));
        self
    }

    /// Queue a reply on a shared mock
    pub fn push(&self, reply: MockReply) {
        self.responses.lock().unwrap().push(reply);
    }

    /// Get all requests that were sent
    pub fn calls(&self) -> Vec<OneTurnRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the most recent request
    pub fn last_call(&self) -> Option<OneTurnRequest> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Get the number of times the model was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockChatModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseChatModel for MockChatModel {
    async fn one_turn(&self, request: OneTurnRequest) -> Result<String, RemoteCallError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return default mock response
            return Ok("Mock model response".to_string());
        }

        match responses.remove(0) {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => Err(RemoteCallError::Failed(message)),
            MockReply::Rejected(reason) => Err(RemoteCallError::ContentPolicy { reason }),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks with handles kept for assertions.
pub struct TestDependencies {
    pub chat_model: Arc<MockChatModel>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            chat_model: Arc::new(MockChatModel::new()),
        }
    }

    pub fn with_chat_model(chat_model: MockChatModel) -> Self {
        Self {
            chat_model: Arc::new(chat_model),
        }
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.chat_model.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
