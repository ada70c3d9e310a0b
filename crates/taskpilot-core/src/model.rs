//! Record, creation, and update shapes for todo items.

use crate::error::InvalidFieldValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of categories a todo may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Work-related task.
    Work,
    /// Personal errand.
    Personal,
    /// Shopping item.
    Shopping,
    /// Anything else.
    Other,
}

impl Category {
    /// Allowed wire values, in declaration order.
    pub const ALLOWED: &'static [&'static str] = &["work", "personal", "shopping", "other"];

    /// Lowercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InvalidFieldValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            "shopping" => Ok(Self::Shopping),
            "other" => Ok(Self::Other),
            _ => Err(InvalidFieldValue {
                field: "category",
                allowed: "work, personal, shopping, other",
            }),
        }
    }
}

/// Closed set of priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Default urgency.
    Medium,
    /// High urgency.
    High,
}

impl Priority {
    /// Allowed wire values, in declaration order.
    pub const ALLOWED: &'static [&'static str] = &["low", "medium", "high"];

    /// Lowercase wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = InvalidFieldValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(InvalidFieldValue {
                field: "priority",
                allowed: "low, medium, high",
            }),
        }
    }
}

/// Persisted todo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// Short task title.
    pub task: String,
    /// Longer free-text detail.
    pub description: Option<String>,
    /// Category from the closed set.
    pub category: Category,
    /// Priority from the closed set.
    pub priority: Priority,
    /// Optional due date (`YYYY-MM-DD` on the wire).
    pub due_date: Option<NaiveDate>,
}

impl Todo {
    /// Overwrite every draft-backed field with the draft's values.
    ///
    /// Used when a natural-text update supersedes structured fields.
    pub fn apply_draft(&mut self, draft: TodoDraft) {
        self.task = draft.task;
        self.description = draft.description;
        self.category = draft.category;
        self.priority = draft.priority;
        self.due_date = draft.due_date;
    }
}

/// Validated creation shape: a [`Todo`] without an id.
///
/// Deserialization enforces the closed category/priority enumerations; the
/// serde error for an unknown variant names the allowed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDraft {
    /// Short task title.
    pub task: String,
    /// Longer free-text detail.
    #[serde(default)]
    pub description: Option<String>,
    /// Category from the closed set.
    pub category: Category,
    /// Priority from the closed set.
    pub priority: Priority,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// Partial update shape. Absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TodoPatch {
    /// Replacement task title.
    #[serde(default)]
    pub task: Option<String>,
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
    /// Replacement category.
    #[serde(default)]
    pub category: Option<Category>,
    /// Replacement priority.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Replacement due date.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Free text to re-derive all fields from; takes precedence over the
    /// structured fields above when present.
    #[serde(default)]
    pub natural_text: Option<String>,
}

impl TodoPatch {
    /// Apply the supplied structured fields onto `todo`.
    ///
    /// `natural_text` is not handled here; callers route it through the
    /// enrichment client first.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(task) = &self.task {
            todo.task = task.clone();
        }
        if let Some(description) = &self.description {
            todo.description = Some(description.clone());
        }
        if let Some(category) = self.category {
            todo.category = category;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = Some(due_date);
        }
    }
}
