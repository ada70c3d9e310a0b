//! Handler-boundary error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use taskpilot_enrich::EnrichError;
use taskpilot_store::StoreError;

/// Errors a handler can surface to the client.
///
/// Every recoverable failure becomes a status code plus a
/// `{"detail": "..."}` body; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or invalid request input, including enrichment failures.
    #[error("{0}")]
    BadRequest(String),
    /// No record with the requested id.
    #[error("Todo not found")]
    NotFound,
    /// Store failure. Detail is logged, not sent to the client.
    #[error("internal server error")]
    Internal(String),
}

impl From<EnrichError> for ApiError {
    fn from(err: EnrichError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            Self::Internal(detail) => {
                error!("request failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
