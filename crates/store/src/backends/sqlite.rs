//! SQLite-backed document store.
//!
//! Posts are stored as JSON blobs in a single `posts` table, with the ID,
//! cleanup tag, and creation time lifted into columns for lookup and
//! ordering.
//!
//! rusqlite is synchronous, so every query runs on the tokio blocking
//! pool via `spawn_blocking`. This keeps a slow or wedged database call
//! (pool checkout, busy database) from stalling the async runtime, and
//! gives callers racing the store against a timeout a point at which the
//! timeout can actually fire.

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::store::DocumentStore;
use crate::types::{PostDraft, StoredPost};

/// SQLite backend for blog post storage.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteStoreConfig,
    is_memory: bool,
}

impl Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone)]
pub struct SqliteStoreConfig {
    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum number of idle connections.
    pub min_connections: u32,

    /// Connection timeout in milliseconds.
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for better concurrency (file-backed databases only).
    pub enable_wal: bool,
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connection_timeout_ms: 30_000,
            busy_timeout_ms: 5_000,
            enable_wal: true,
        }
    }
}

impl SqliteStore {
    /// Creates a new in-memory store.
    ///
    /// The pool is capped at a single connection: each SQLite `:memory:`
    /// connection is a distinct database, so the one pooled connection is
    /// what keeps the data alive and visible across operations.
    pub fn in_memory() -> StoreResult<Self> {
        let config = SqliteStoreConfig {
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        Self::with_config(":memory:", config)
    }

    /// Opens or creates a file-based store.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        Self::with_config(path, SqliteStoreConfig::default())
    }

    /// Creates a store with custom configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: SqliteStoreConfig) -> StoreResult<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let is_memory = path_str == ":memory:";

        let manager = SqliteConnectionManager::file(path.as_ref());

        let pool = Pool::builder()
            .max_size(config.max_connections)
            .min_idle(Some(config.min_connections))
            .connection_timeout(std::time::Duration::from_millis(
                config.connection_timeout_ms,
            ))
            .build(manager)
            .map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;

        let store = Self {
            pool,
            config,
            is_memory,
        };
        store.configure_connection()?;

        Ok(store)
    }

    /// Initializes the database schema. Idempotent.
    pub fn init_schema(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS posts (
                 id      TEXT PRIMARY KEY,
                 tag     TEXT,
                 data    BLOB NOT NULL,
                 created TEXT NOT NULL,
                 updated TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_posts_tag ON posts (tag);",
        )
        .map_err(|e| StoreError::Internal {
            message: format!("Failed to initialize schema: {}", e),
        })
    }

    /// Gets a connection from the pool.
    fn get_connection(&self) -> StoreResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| StoreError::Connection {
            message: e.to_string(),
        })
    }

    /// Applies connection-level pragmas.
    fn configure_connection(&self) -> StoreResult<()> {
        let conn = self.get_connection()?;

        conn.busy_timeout(std::time::Duration::from_millis(
            self.config.busy_timeout_ms as u64,
        ))
        .map_err(|e| StoreError::Internal {
            message: format!("Failed to set busy timeout: {}", e),
        })?;

        if self.config.enable_wal && !self.is_memory {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| StoreError::Internal {
                    message: format!("Failed to enable WAL mode: {}", e),
                })?;
        }

        Ok(())
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteStoreConfig {
        &self.config
    }

    /// Runs a query on the blocking pool with a connection checked out
    /// from the r2d2 pool.
    async fn run_blocking<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: FnOnce(PooledConnection<SqliteConnectionManager>) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get().map_err(|e| StoreError::Connection {
                message: e.to_string(),
            })?;
            op(conn)
        })
        .await
        .map_err(|e| StoreError::Internal {
            message: format!("Blocking task failed: {}", e),
        })?
    }

    fn serialize(post: &StoredPost) -> StoreResult<Vec<u8>> {
        serde_json::to_vec(post).map_err(|e| StoreError::Serialization {
            message: format!("Failed to serialize post: {}", e),
        })
    }

    fn deserialize(data: &[u8]) -> StoreResult<StoredPost> {
        serde_json::from_slice(data).map_err(|e| StoreError::Serialization {
            message: format!("Failed to deserialize post: {}", e),
        })
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<StoredPost> {
        let id = draft
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let post = StoredPost::from_draft(&id, draft, Utc::now());
        let data = Self::serialize(&post)?;

        let post = self
            .run_blocking(move |conn| {
                // The PRIMARY KEY constraint is the uniqueness check;
                // a separate exists-then-insert would race under a
                // multi-connection pool
                match conn.execute(
                    "INSERT INTO posts (id, tag, data, created, updated)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        post.id,
                        post.tag,
                        data,
                        post.created.to_rfc3339(),
                        post.updated.to_rfc3339()
                    ],
                ) {
                    Ok(_) => Ok(post),
                    Err(rusqlite::Error::SqliteFailure(e, _))
                        if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                    {
                        Err(StoreError::AlreadyExists { id: post.id })
                    }
                    Err(e) => Err(StoreError::Internal {
                        message: format!("Failed to insert post: {}", e),
                    }),
                }
            })
            .await?;

        tracing::debug!(id = %post.id, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredPost>> {
        let id = id.to_string();

        self.run_blocking(move |conn| {
            let result: Result<Vec<u8>, _> = conn.query_row(
                "SELECT data FROM posts WHERE id = ?1",
                params![id],
                |row| row.get(0),
            );

            match result {
                Ok(data) => Ok(Some(Self::deserialize(&data)?)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(StoreError::Internal {
                    message: format!("Failed to read post: {}", e),
                }),
            }
        })
        .await
    }

    async fn update(&self, current: &StoredPost, draft: PostDraft) -> StoreResult<StoredPost> {
        let post = current.revise(draft, Utc::now());
        let data = Self::serialize(&post)?;

        let post = self
            .run_blocking(move |conn| {
                let rows = conn
                    .execute(
                        "UPDATE posts SET tag = ?2, data = ?3, updated = ?4 WHERE id = ?1",
                        params![post.id, post.tag, data, post.updated.to_rfc3339()],
                    )
                    .map_err(|e| StoreError::Internal {
                        message: format!("Failed to update post: {}", e),
                    })?;

                if rows == 0 {
                    return Err(StoreError::NotFound { id: post.id });
                }
                Ok(post)
            })
            .await?;

        tracing::debug!(id = %post.id, "post updated");
        Ok(post)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let id = id.to_string();

        let id = self
            .run_blocking(move |conn| {
                let rows = conn
                    .execute("DELETE FROM posts WHERE id = ?1", params![id])
                    .map_err(|e| StoreError::Internal {
                        message: format!("Failed to delete post: {}", e),
                    })?;

                if rows == 0 {
                    return Err(StoreError::NotFound { id });
                }
                Ok(id)
            })
            .await?;

        tracing::debug!(id = %id, "post deleted");
        Ok(())
    }

    async fn delete_by_tag(&self, tag: &str) -> StoreResult<u64> {
        let tag = tag.to_string();

        let (tag, rows) = self
            .run_blocking(move |conn| {
                let rows = conn
                    .execute("DELETE FROM posts WHERE tag = ?1", params![tag])
                    .map_err(|e| StoreError::Internal {
                        message: format!("Failed to delete posts by tag: {}", e),
                    })?;
                Ok((tag, rows as u64))
            })
            .await?;

        tracing::debug!(tag = %tag, removed = rows, "tagged posts deleted");
        Ok(rows)
    }

    async fn clear(&self) -> StoreResult<u64> {
        let rows = self
            .run_blocking(|conn| {
                conn.execute("DELETE FROM posts", [])
                    .map(|rows| rows as u64)
                    .map_err(|e| StoreError::Internal {
                        message: format!("Failed to clear posts: {}", e),
                    })
            })
            .await?;

        tracing::debug!(removed = rows, "database cleared");
        Ok(rows)
    }

    async fn count(&self) -> StoreResult<u64> {
        self.run_blocking(|conn| {
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
                .map_err(|e| StoreError::Internal {
                    message: format!("Failed to count posts: {}", e),
                })?;
            Ok(count as u64)
        })
        .await
    }

    async fn list(&self) -> StoreResult<Vec<StoredPost>> {
        self.run_blocking(|conn| {
            let mut stmt = conn
                .prepare("SELECT data FROM posts ORDER BY created, id")
                .map_err(|e| StoreError::Internal {
                    message: format!("Failed to prepare list query: {}", e),
                })?;

            let rows = stmt
                .query_map([], |row| row.get::<_, Vec<u8>>(0))
                .map_err(|e| StoreError::Internal {
                    message: format!("Failed to list posts: {}", e),
                })?;

            let mut posts = Vec::new();
            for row in rows {
                let data = row.map_err(|e| StoreError::Internal {
                    message: format!("Failed to read list row: {}", e),
                })?;
                posts.push(Self::deserialize(&data)?);
            }
            Ok(posts)
        })
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.run_blocking(|conn| {
            conn.query_row("SELECT 1", [], |_| Ok(()))
                .map_err(|e| StoreError::Internal {
                    message: format!("Ping failed: {}", e),
                })
        })
        .await
    }
}
