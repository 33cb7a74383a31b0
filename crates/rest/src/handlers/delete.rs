//! Delete interaction handler.
//!
//! `DELETE /posts/{id}`

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for deleting a post.
///
/// The delete is hard: the document is removed and a subsequent read
/// returns 404.
///
/// # Response
///
/// - `204 No Content` - post deleted
/// - `404 Not Found` - no post with that ID
pub async fn delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    debug!(id = %id, "Processing delete request");

    state.store().delete(&id).await?;

    debug!(id = %id, "Deleted post");

    Ok(StatusCode::NO_CONTENT.into_response())
}
