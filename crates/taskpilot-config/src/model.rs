//! Configuration schema for the taskpilot server.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root config for the taskpilot server.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskpilotConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// SQLite store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Enrichment (Groq completion API) settings.
    #[serde(default)]
    pub groq: GroqConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address, `host:port`.
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Directory of static frontend assets served at `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            static_dir: default_static_dir(),
        }
    }
}

/// SQLite store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Settings for the hosted completion endpoint used for enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key. Usually supplied via `GROQ_API_KEY` rather than the file.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_groq_base_url")]
    pub base_url: String,
    /// Model identifier.
    #[serde(default = "default_groq_model")]
    pub model: String,
    /// Request timeout in seconds for the outbound completion call.
    #[serde(default = "default_groq_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_groq_base_url(),
            model: default_groq_model(),
            timeout_secs: default_groq_timeout_secs(),
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("frontend")
}

fn default_db_path() -> PathBuf {
    PathBuf::from("todos.db")
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_groq_model() -> String {
    "llama3-70b-8192".to_string()
}

fn default_groq_timeout_secs() -> u64 {
    30
}
