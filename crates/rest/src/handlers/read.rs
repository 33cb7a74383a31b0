//! Read interaction handler.
//!
//! `GET /posts/{id}`

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;
use tracing::debug;

use crate::error::{ApiError, RestResult};
use crate::state::AppState;

/// Handler for reading a single post by ID.
///
/// # Response
///
/// - `200 OK` - returns the post
/// - `404 Not Found` - no post with that ID
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(id = %id, "Processing read request");

    match state.store().find_by_id(&id).await? {
        Some(post) => Ok(Json(post).into_response()),
        None => {
            debug!(id = %id, "Post not found");
            Err(ApiError::NotFound { id })
        }
    }
}
