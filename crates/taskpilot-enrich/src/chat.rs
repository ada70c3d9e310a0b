//! Chat-model seam for the enrichment flow.

use crate::error::EnrichError;
use async_trait::async_trait;

/// A single system + user exchange sent to a completion model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// System instructions (rules, examples, current date).
    pub system: String,
    /// User message carrying the free-text input.
    pub user: String,
}

/// Completion model abstraction used by the enricher.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Submit the exchange and return the raw reply body.
    ///
    /// Implementations are expected to request strict JSON output; the
    /// enricher still treats the body as untrusted text.
    async fn chat_json(&self, request: &ChatRequest) -> Result<String, EnrichError>;
}
