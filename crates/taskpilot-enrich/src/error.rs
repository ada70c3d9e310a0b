//! Error taxonomy for the enrichment flow.
//!
//! Failures are tagged by cause rather than collapsed into one kind, so
//! callers can branch without string-matching. Every variant maps to a
//! client-visible 400 at the handler boundary.

/// Errors produced while deriving a todo draft from free text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichError {
    /// The outbound completion call failed (network, auth, bad status).
    #[error("API Error: {0}")]
    Transport(String),
    /// The model reply was not valid JSON.
    #[error("Invalid JSON response: {0}")]
    Parse(String),
    /// A required key was absent from the model reply.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A reply field failed validation (out-of-enum value, wrong type).
    #[error("invalid field in response: {0}")]
    InvalidField(String),
    /// The reply's due date did not parse as `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
    /// The reply's due date is earlier than today.
    #[error("Due date cannot be in the past")]
    PastDueDate,
}
