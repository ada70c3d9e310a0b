//! Domain model and validation for taskpilot todo records.

pub mod error;
pub mod model;

/// Field validation error.
pub use error::InvalidFieldValue;
/// Record, creation, and update shapes.
pub use model::{Category, Priority, Todo, TodoDraft, TodoPatch};
