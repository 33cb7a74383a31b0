//! Update interaction handler.
//!
//! `PUT /posts/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;
use tracing::debug;

use crate::error::{ApiError, RestResult};
use crate::handlers::parse_draft;
use crate::state::AppState;

/// Handler for replacing an existing post.
///
/// The body carries the full replacement document. If the body includes an
/// `id` it must match the path ID. The stored `created` timestamp is
/// preserved and `updated` is bumped.
///
/// # Response
///
/// - `200 OK` - returns the updated post
/// - `400 Bad Request` - malformed body, or body ID does not match the path
/// - `404 Not Found` - no post with that ID
pub async fn update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    let draft = parse_draft(body)?;

    if let Some(body_id) = &draft.id
        && body_id != &id
    {
        return Err(ApiError::BadRequest {
            message: format!("Body id '{}' does not match path id '{}'", body_id, id),
        });
    }

    debug!(id = %id, "Processing update request");

    let current = state
        .store()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound { id: id.clone() })?;

    let updated = state.store().update(&current, draft).await?;

    debug!(id = %updated.id, "Updated post");

    Ok(Json(updated).into_response())
}
