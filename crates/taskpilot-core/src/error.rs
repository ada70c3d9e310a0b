//! Error types for field validation.

/// A value outside one of the closed field enumerations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}. Must be one of [{allowed}]")]
pub struct InvalidFieldValue {
    /// Field name, e.g. `category`.
    pub field: &'static str,
    /// Comma-separated allowed values.
    pub allowed: &'static str,
}
