//! HTTP request handlers for the blog post API.
//!
//! Each interaction lives in its own module:
//!
//! - [`create`] - `POST /posts`
//! - [`read`] - `GET /posts/{id}`
//! - [`list`] - `GET /posts`
//! - [`update`] - `PUT /posts/{id}`
//! - [`delete`] - `DELETE /posts/{id}`
//! - [`health`] - `GET /health`

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

pub use create::create_handler;
pub use delete::delete_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;

use quill_store::PostDraft;

use crate::error::{ApiError, RestResult};

/// Parses a request body into a [`PostDraft`].
///
/// Deserialization happens here rather than in an extractor so that a
/// malformed body produces a 400 with a useful message instead of the
/// framework's default 422.
pub(crate) fn parse_draft(body: serde_json::Value) -> RestResult<PostDraft> {
    let draft: PostDraft = serde_json::from_value(body)?;
    draft.validate().map_err(|message| ApiError::BadRequest { message })?;
    Ok(draft)
}
