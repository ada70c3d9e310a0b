//! File + environment configuration loader.
//!
//! Loads an optional JSON5 config file, then applies environment variable
//! overrides on top. Environment always wins over the file.

use crate::{ConfigError, TaskpilotConfig};
use log::{debug, info};
use std::path::Path;

/// Default config filename looked up in the working directory.
const DEFAULT_CONFIG_FILE: &str = "taskpilot.json5";

/// Env var naming an alternate config file path.
const CONFIG_PATH_VAR: &str = "TASKPILOT_CONFIG";

/// Load configuration from the default (or `TASKPILOT_CONFIG`-named) file,
/// then apply environment overrides.
pub fn load() -> Result<TaskpilotConfig, ConfigError> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let mut config = if Path::new(&path).exists() {
        info!("loading config from {path}");
        from_file(&path)?
    } else {
        debug!("no config file at {path}, using defaults");
        TaskpilotConfig::default()
    };
    apply_env(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Parse a JSON5 config file into a [`TaskpilotConfig`].
pub fn from_file(path: impl AsRef<Path>) -> Result<TaskpilotConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(json5::from_str(&raw)?)
}

/// Apply environment overrides from `lookup` onto `config`.
///
/// Recognized variables: `GROQ_API_KEY`, `TASKPILOT_DB`, `TASKPILOT_ADDR`,
/// `TASKPILOT_STATIC_DIR`.
pub fn apply_env(config: &mut TaskpilotConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = lookup("GROQ_API_KEY") {
        config.groq.api_key = Some(key);
    }
    if let Some(path) = lookup("TASKPILOT_DB") {
        config.database.path = path.into();
    }
    if let Some(addr) = lookup("TASKPILOT_ADDR") {
        config.server.addr = addr;
    }
    if let Some(dir) = lookup("TASKPILOT_STATIC_DIR") {
        config.server.static_dir = dir.into();
    }
}
