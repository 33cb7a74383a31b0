//! Core document store trait.
//!
//! This module defines the [`DocumentStore`] trait, which provides the CRUD
//! operations for blog post documents plus the whole-database operations the
//! integration-test fixture lifecycle relies on (`clear`, `delete_by_tag`,
//! `count`).

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::types::{PostDraft, StoredPost};

/// Storage trait for blog post documents.
///
/// All mutating operations are awaited to completion by callers; a method
/// returning `Ok` means the effect is durably visible to a subsequent read
/// through the same store. This is what allows test fixtures to seed and
/// clean deterministically between tests.
///
/// # Example
///
/// ```ignore
/// use quill_store::{Author, DocumentStore, PostDraft};
///
/// async fn example<S: DocumentStore>(store: &S) -> quill_store::StoreResult<()> {
///     let draft = PostDraft::new("Hello", "World", Author::new("Ada", "Lovelace"));
///     let stored = store.create(draft).await?;
///
///     let read = store.find_by_id(&stored.id).await?;
///     assert!(read.is_some());
///
///     store.delete(&stored.id).await?;
///     assert_eq!(store.count().await?, 0);
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new post, assigning an ID when the draft carries none.
    ///
    /// # Errors
    ///
    /// * `StoreError::AlreadyExists` - the draft carried an ID that is taken
    async fn create(&self, draft: PostDraft) -> StoreResult<StoredPost>;

    /// Reads a post by ID.
    ///
    /// Returns `None` when no post with that ID exists.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredPost>>;

    /// Replaces the content of an existing post.
    ///
    /// `current` is the post as last read; identity and creation time are
    /// preserved and the `updated` timestamp is bumped.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - the post no longer exists
    async fn update(&self, current: &StoredPost, draft: PostDraft) -> StoreResult<StoredPost>;

    /// Deletes a post by ID.
    ///
    /// # Errors
    ///
    /// * `StoreError::NotFound` - no post with that ID exists
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Deletes every post carrying the given tag.
    ///
    /// Returns the number of posts removed. Removing zero posts is not an
    /// error; targeted cleanup must tolerate an already-clean database.
    async fn delete_by_tag(&self, tag: &str) -> StoreResult<u64>;

    /// Removes every post (full database reset).
    ///
    /// Returns the number of posts removed.
    async fn clear(&self) -> StoreResult<u64>;

    /// Counts all posts.
    async fn count(&self) -> StoreResult<u64>;

    /// Lists all posts, ordered by creation time then ID.
    async fn list(&self) -> StoreResult<Vec<StoredPost>>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
