//! Document types for blog posts.
//!
//! This module defines the wire/storage representation of a blog post:
//! [`PostDraft`] for incoming documents and [`StoredPost`] for documents
//! that have been persisted and carry server-assigned metadata.
//!
//! All field names are camelCase on the wire (`author.firstName` etc.),
//! matching the JSON shape the API serves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The author of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Author's first name.
    pub first_name: String,
    /// Author's last name.
    pub last_name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// An incoming blog post document, before it has been persisted.
///
/// This is the body shape accepted by `POST /posts` and `PUT /posts/{id}`.
/// The optional `tag` is an identifying marker used only for targeted test
/// cleanup; it is never required by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Client-supplied ID. Optional; the store assigns one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Post title.
    pub title: String,

    /// Post body content.
    pub content: String,

    /// Post author.
    pub author: Author,

    /// Identifying tag used for targeted cleanup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl PostDraft {
    /// Creates a new draft with the required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            tag: None,
        }
    }

    /// Sets the cleanup tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Validates the draft's required fields.
    ///
    /// Returns a human-readable message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("content must not be empty".to_string());
        }
        if self.author.first_name.trim().is_empty() {
            return Err("author.firstName must not be empty".to_string());
        }
        if self.author.last_name.trim().is_empty() {
            return Err("author.lastName must not be empty".to_string());
        }
        Ok(())
    }
}

/// A blog post with persistence metadata.
///
/// This is the shape returned by every read endpoint: the draft fields plus
/// a server-assigned `id` and `created`/`updated` timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    /// The post's logical ID.
    pub id: String,

    /// Post title.
    pub title: String,

    /// Post body content.
    pub content: String,

    /// Post author.
    pub author: Author,

    /// Identifying tag used for targeted cleanup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// When the post was first created.
    pub created: DateTime<Utc>,

    /// When the post was last modified.
    pub updated: DateTime<Utc>,
}

impl StoredPost {
    /// Materializes a draft into a stored post with the given ID.
    pub fn from_draft(id: impl Into<String>, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tag: draft.tag,
            created: now,
            updated: now,
        }
    }

    /// Produces a new revision of this post carrying the draft's content.
    ///
    /// Identity and `created` are preserved; `updated` is bumped.
    pub fn revise(&self, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tag: draft.tag.or_else(|| self.tag.clone()),
            created: self.created,
            updated: now,
        }
    }
}
