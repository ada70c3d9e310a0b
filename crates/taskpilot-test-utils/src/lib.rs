//! Chat-model doubles shared by taskpilot test suites.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use taskpilot_enrich::{ChatModel, ChatRequest, EnrichError};

/// Chat model returning a canned reply and recording every request.
#[derive(Debug, Clone)]
pub struct FixedChatModel {
    reply: String,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl FixedChatModel {
    /// Build a model that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ChatModel for FixedChatModel {
    async fn chat_json(&self, request: &ChatRequest) -> Result<String, EnrichError> {
        self.requests.lock().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Chat model that always fails with a transport error.
#[derive(Debug, Clone)]
pub struct FailingChatModel {
    message: String,
}

impl FailingChatModel {
    /// Build a model failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl ChatModel for FailingChatModel {
    async fn chat_json(&self, _request: &ChatRequest) -> Result<String, EnrichError> {
        Err(EnrichError::Transport(self.message.clone()))
    }
}
