//! Misbehaving store wrappers for exercising the harness failure paths.

use std::time::Duration;

use async_trait::async_trait;
use quill_store::{DocumentStore, MemoryStore, PostDraft, StoreError, StoreResult, StoredPost};

/// Delegates to an in-memory store, pausing before every operation.
///
/// Used to simulate a wedged database so the harness's per-hook timeout
/// has something to catch.
pub struct StallingStore {
    inner: MemoryStore,
    stall: Duration,
}

impl StallingStore {
    pub fn new(stall: Duration) -> Self {
        Self {
            inner: MemoryStore::new(),
            stall,
        }
    }

    async fn pause(&self) {
        tokio::time::sleep(self.stall).await;
    }
}

#[async_trait]
impl DocumentStore for StallingStore {
    fn backend_name(&self) -> &'static str {
        "stalling"
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<StoredPost> {
        self.pause().await;
        self.inner.create(draft).await
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredPost>> {
        self.pause().await;
        self.inner.find_by_id(id).await
    }

    async fn update(&self, current: &StoredPost, draft: PostDraft) -> StoreResult<StoredPost> {
        self.pause().await;
        self.inner.update(current, draft).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.pause().await;
        self.inner.delete(id).await
    }

    async fn delete_by_tag(&self, tag: &str) -> StoreResult<u64> {
        self.pause().await;
        self.inner.delete_by_tag(tag).await
    }

    async fn clear(&self) -> StoreResult<u64> {
        self.pause().await;
        self.inner.clear().await
    }

    async fn count(&self) -> StoreResult<u64> {
        self.pause().await;
        self.inner.count().await
    }

    async fn list(&self) -> StoreResult<Vec<StoredPost>> {
        self.pause().await;
        self.inner.list().await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.pause().await;
        self.inner.ping().await
    }
}

/// Delegates to an in-memory store but fails every cleanup operation.
pub struct FailingCleanupStore {
    inner: MemoryStore,
}

impl FailingCleanupStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }

    fn cleanup_failure() -> StoreError {
        StoreError::Internal {
            message: "database connection lost".to_string(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingCleanupStore {
    fn backend_name(&self) -> &'static str {
        "failing-cleanup"
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<StoredPost> {
        self.inner.create(draft).await
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredPost>> {
        self.inner.find_by_id(id).await
    }

    async fn update(&self, current: &StoredPost, draft: PostDraft) -> StoreResult<StoredPost> {
        self.inner.update(current, draft).await
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.inner.delete(id).await
    }

    async fn delete_by_tag(&self, _tag: &str) -> StoreResult<u64> {
        Err(Self::cleanup_failure())
    }

    async fn clear(&self) -> StoreResult<u64> {
        Err(Self::cleanup_failure())
    }

    async fn count(&self) -> StoreResult<u64> {
        self.inner.count().await
    }

    async fn list(&self) -> StoreResult<Vec<StoredPost>> {
        self.inner.list().await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.inner.ping().await
    }
}
