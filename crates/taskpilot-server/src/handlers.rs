//! Request handlers for the five todo operations.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};
use taskpilot_core::{Todo, TodoPatch};

/// Creation body: free text only; structured fields come from enrichment.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Free-text input to derive the todo from.
    #[serde(default)]
    pub natural_text: Option<String>,
}

/// POST /api/todos — derive a draft from free text and persist it.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let text = body
        .natural_text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::BadRequest("natural_text field required".to_string()))?;

    let draft = state.enricher().parse_todo(text, state.today()).await?;
    let todo = state.store().lock().await.insert(&draft)?;
    info!("created todo {}", todo.id);
    Ok(Json(todo))
}

/// GET /api/todos — every record, insertion order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.store().lock().await.list()?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.store().lock().await.get(id)?;
    todo.map(Json).ok_or(ApiError::NotFound)
}

/// PUT /api/todos/{id} — partial merge; `natural_text` re-derives all
/// fields and takes precedence over structured fields sent alongside it.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let mut todo = state
        .store()
        .lock()
        .await
        .get(id)?
        .ok_or(ApiError::NotFound)?;

    if let Some(text) = patch.natural_text.as_deref() {
        let draft = state.enricher().parse_todo(text, state.today()).await?;
        todo.apply_draft(draft);
    } else {
        // Past-due rejection holds on structured writes too, not just the
        // enrichment path.
        if let Some(due) = patch.due_date {
            if due < state.today() {
                return Err(ApiError::BadRequest(
                    "Due date cannot be in the past".to_string(),
                ));
            }
        }
        patch.apply(&mut todo);
    }

    // The record may have been deleted while enrichment was in flight.
    if !state.store().lock().await.update(&todo)? {
        return Err(ApiError::NotFound);
    }
    info!("updated todo {id}");
    Ok(Json(todo))
}

/// DELETE /api/todos/{id}.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !state.store().lock().await.delete(id)? {
        return Err(ApiError::NotFound);
    }
    info!("deleted todo {id}");
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
