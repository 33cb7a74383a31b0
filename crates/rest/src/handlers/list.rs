//! List interaction handler.
//!
//! `GET /posts`

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing every post.
///
/// Returns a JSON array ordered by creation time. An empty database yields
/// an empty array, not an error.
pub async fn list_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    let posts = state.store().list().await?;

    debug!(count = posts.len(), "Listing posts");

    Ok(Json(posts).into_response())
}
