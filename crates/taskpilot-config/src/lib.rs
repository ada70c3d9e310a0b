//! Configuration loading for the taskpilot server.

pub mod error;
pub mod loader;
pub mod model;

/// Config loading/validation error.
pub use error::ConfigError;
/// File + environment loader entry point.
pub use loader::load;
/// Typed configuration tree.
pub use model::{DatabaseConfig, GroqConfig, ServerConfig, TaskpilotConfig};
