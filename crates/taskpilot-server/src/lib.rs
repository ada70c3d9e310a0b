//! HTTP application for the taskpilot backend.
//!
//! Five JSON endpoints under `/api`, a permissive CORS policy, and static
//! frontend serving. Handlers orchestrate validation, enrichment, and
//! persistence; no state is shared across requests beyond the store.

pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

/// API error type.
pub use error::ApiError;
/// Shared per-request state.
pub use state::AppState;

/// Build the `/api` router with CORS applied.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            post(handlers::create_todo).get(handlers::list_todos),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        // Permissive settings for development use.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Build the full application: API routes plus the static frontend mounted
/// at `/static` and its `index.html` at the root.
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    api_router(state)
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
}
