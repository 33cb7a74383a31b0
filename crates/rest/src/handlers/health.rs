//! Health check handler.
//!
//! `GET /health`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;

use crate::error::{ApiError, RestResult};
use crate::state::AppState;

/// Handler for the health check.
///
/// Pings the store so a broken database surfaces as 503 rather than a
/// misleading 200.
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::Unavailable {
            message: e.to_string(),
        })?;

    let body = serde_json::json!({
        "status": "ok",
        "backend": state.store().backend_name(),
    });
    Ok(Json(body).into_response())
}
