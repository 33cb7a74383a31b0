//! In-memory document store.
//!
//! A trivially disposable backend used by tests that do not need a real
//! database file. Backed by a `parking_lot::RwLock<HashMap>`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;
use crate::types::{PostDraft, StoredPost};

/// In-memory backend for blog post storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<HashMap<String, StoredPost>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<StoredPost> {
        let id = draft
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut posts = self.posts.write();
        if posts.contains_key(&id) {
            return Err(StoreError::AlreadyExists { id });
        }

        let post = StoredPost::from_draft(&id, draft, Utc::now());
        posts.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredPost>> {
        Ok(self.posts.read().get(id).cloned())
    }

    async fn update(&self, current: &StoredPost, draft: PostDraft) -> StoreResult<StoredPost> {
        let mut posts = self.posts.write();
        if !posts.contains_key(&current.id) {
            return Err(StoreError::NotFound {
                id: current.id.clone(),
            });
        }

        let post = current.revise(draft, Utc::now());
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        match self.posts.write().remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    async fn delete_by_tag(&self, tag: &str) -> StoreResult<u64> {
        let mut posts = self.posts.write();
        let before = posts.len();
        posts.retain(|_, post| post.tag.as_deref() != Some(tag));
        Ok((before - posts.len()) as u64)
    }

    async fn clear(&self) -> StoreResult<u64> {
        let mut posts = self.posts.write();
        let removed = posts.len();
        posts.clear();
        Ok(removed as u64)
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.posts.read().len() as u64)
    }

    async fn list(&self) -> StoreResult<Vec<StoredPost>> {
        let mut posts: Vec<StoredPost> = self.posts.read().values().cloned().collect();
        posts.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
