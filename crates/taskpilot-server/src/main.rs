//! Server binary: config, wiring, and the axum listener.

use anyhow::Context;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use taskpilot_config::ConfigError;
use taskpilot_enrich::GroqClient;
use taskpilot_server::AppState;
use taskpilot_store::TodoStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = taskpilot_config::load()?;
    let api_key = config
        .groq
        .api_key
        .clone()
        .ok_or(ConfigError::Missing("groq.api_key (set GROQ_API_KEY)"))?;
    let model = GroqClient::with_options(
        api_key,
        &config.groq.base_url,
        &config.groq.model,
        Duration::from_secs(config.groq.timeout_secs),
    )?;
    let store = TodoStore::open(&config.database.path)?;

    let state = AppState::new(store, Arc::new(model));
    let app = taskpilot_server::app(state, &config.server.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.server.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.addr))?;
    info!("listening on {}", config.server.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
