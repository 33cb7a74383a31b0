//! Create interaction handler.
//!
//! `POST /posts`

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use quill_store::DocumentStore;
use tracing::debug;

use crate::error::{ApiError, RestResult};
use crate::handlers::parse_draft;
use crate::state::AppState;

/// Handler for creating a post.
///
/// # HTTP Request
///
/// `POST /posts` with a JSON body containing `title`, `content`, and
/// `author` (`firstName`, `lastName`). An optional `id` fixes the document
/// ID; an optional `tag` labels the post for tag-scoped cleanup.
///
/// # Response
///
/// - `201 Created` - returns the stored post with a `Location` header
/// - `400 Bad Request` - body is malformed or a required field is missing
/// - `409 Conflict` - a post with the supplied `id` already exists
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<serde_json::Value>,
) -> RestResult<Response>
where
    S: DocumentStore + 'static,
{
    let draft = parse_draft(body)?;

    debug!(title = %draft.title, "Processing create request");

    let stored = state.store().create(draft).await?;

    let location = format!("{}/posts/{}", state.base_url(), stored.id);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&location).map_err(|e| ApiError::Internal {
            message: format!("Invalid Location header: {}", e),
        })?,
    );

    debug!(id = %stored.id, "Created post");

    Ok((StatusCode::CREATED, headers, Json(stored)).into_response())
}
