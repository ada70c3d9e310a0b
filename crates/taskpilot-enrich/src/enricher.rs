//! Enrichment entry point: prompt assembly, reply parsing, validation.

use crate::chat::{ChatModel, ChatRequest};
use crate::error::EnrichError;
use crate::prompt;
use chrono::NaiveDate;
use log::debug;
use std::sync::Arc;
use taskpilot_core::TodoDraft;

/// Keys the model reply must always carry.
const REQUIRED_KEYS: [&str; 3] = ["task", "category", "priority"];

/// Turns free text into a validated [`TodoDraft`] via a chat model.
#[derive(Clone)]
pub struct Enricher {
    model: Arc<dyn ChatModel>,
}

impl Enricher {
    /// Create an enricher over the given model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Derive a draft from `natural_text`, validating against `today`.
    pub async fn parse_todo(
        &self,
        natural_text: &str,
        today: NaiveDate,
    ) -> Result<TodoDraft, EnrichError> {
        let request = ChatRequest {
            system: prompt::system_prompt(today),
            user: prompt::user_prompt(natural_text),
        };
        let content = self.model.chat_json(&request).await?;
        debug!("model reply: {} bytes", content.len());
        parse_reply(&content, today)
    }
}

/// Parse and validate a raw model reply into a [`TodoDraft`].
///
/// Required keys must be present; a due date, when given, must be a valid
/// `YYYY-MM-DD` string no earlier than `today`; category and priority must
/// fall inside their closed enumerations.
pub fn parse_reply(content: &str, today: NaiveDate) -> Result<TodoDraft, EnrichError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|err| EnrichError::Parse(err.to_string()))?;

    for key in REQUIRED_KEYS {
        if value.get(key).is_none() {
            return Err(EnrichError::MissingField(key));
        }
    }

    if let Some(raw) = value.get("due_date").filter(|raw| !raw.is_null()) {
        let text = raw
            .as_str()
            .ok_or_else(|| EnrichError::InvalidDate(raw.to_string()))?;
        let parsed = NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| EnrichError::InvalidDate(text.to_string()))?;
        if parsed < today {
            return Err(EnrichError::PastDueDate);
        }
    }

    serde_json::from_value(value).map_err(|err| EnrichError::InvalidField(err.to_string()))
}
