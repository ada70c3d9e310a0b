//! SQLite persistence for todo records.

pub mod error;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// SQLite-backed todo store.
pub use store::TodoStore;
