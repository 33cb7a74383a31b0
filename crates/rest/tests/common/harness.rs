//! REST API test harness.
//!
//! Orchestrates the fixture lifecycle around each test: bring the server
//! up against a disposable database, seed known records before the test
//! body, and clean the database afterwards so no state leaks between
//! tests.
//!
//! The harness tracks its phase explicitly:
//!
//! ```text
//! NOT_STARTED -> SERVER_UP -> (SEEDED <-> CLEAN)* -> SERVER_DOWN
//! ```
//!
//! Seeding while already seeded is a phase error, which is how a test
//! that forgot to clean up gets caught instead of silently corrupting
//! the next test's starting state. Every lifecycle step is awaited and
//! bounded by a timeout; an unawaited cleanup is exactly the defect
//! this harness exists to prevent.

use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use quill_store::{DocumentStore, SqliteStore, StoredPost};
use serde_json::Value;

use quill_rest::{ServerConfig, create_app_with_config};

use super::fixtures::TestFixtures;

/// Default bound on each lifecycle hook.
const DEFAULT_HOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Lifecycle phase of the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No server or database yet.
    NotStarted,
    /// Server is up, database is empty and has never been seeded.
    ServerUp,
    /// Seed records are in the database.
    Seeded,
    /// Database has been cleaned after a seed.
    Clean,
}

/// Test harness for REST API testing.
///
/// Generic over the store so tests can swap in a misbehaving backend;
/// [`TestHarness::start`] is the common case and uses an in-memory
/// SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_read() {
///     let mut harness = TestHarness::start().await.unwrap();
///     let seeded = harness.seed(&TestFixtures::single()).await.unwrap();
///
///     let response = harness.get(&format!("/posts/{}", seeded[0].id)).await;
///     assert_eq!(response.status_code(), 200);
///
///     harness.reset().await.unwrap();
/// }
/// ```
///
/// Dropping the harness tears the server down; the explicit phase
/// tracking only governs seed/clean ordering within a test.
pub struct TestHarness<S: DocumentStore + 'static = SqliteStore> {
    /// The test server instance.
    pub server: TestServer,

    /// Handle to the same store the server reads from.
    pub store: Arc<S>,

    /// Server configuration.
    pub config: ServerConfig,

    phase: Phase,
    hook_timeout: Duration,
}

impl TestHarness<SqliteStore> {
    /// Brings up the server against a fresh in-memory database.
    ///
    /// Failure here is fatal to the calling test; nothing else can
    /// meaningfully run without a live server.
    pub async fn start() -> Result<Self, HarnessError> {
        let store = SqliteStore::in_memory()
            .map_err(|e| HarnessError::Setup(format!("Failed to open database: {e}")))?;
        store
            .init_schema()
            .map_err(|e| HarnessError::Setup(format!("Failed to initialize schema: {e}")))?;

        Self::with_store(Arc::new(store))
    }
}

impl<S: DocumentStore + 'static> TestHarness<S> {
    /// Brings up the server over the given store.
    pub fn with_store(store: Arc<S>) -> Result<Self, HarnessError> {
        let config = ServerConfig::for_testing();

        let app = create_app_with_config(Arc::clone(&store), config.clone());
        let server = TestServer::new(app)
            .map_err(|e| HarnessError::Setup(format!("Failed to start test server: {e}")))?;

        Ok(Self {
            server,
            store,
            config,
            phase: Phase::ServerUp,
            hook_timeout: DEFAULT_HOOK_TIMEOUT,
        })
    }

    /// Overrides the per-hook timeout.
    pub fn with_hook_timeout(mut self, timeout: Duration) -> Self {
        self.hook_timeout = timeout;
        self
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inserts the seed records, returning them as stored.
    ///
    /// Valid from `ServerUp` or `Clean`. Seeding while already `Seeded`
    /// is rejected: the previous test's cleanup did not run.
    pub async fn seed(&mut self, fixtures: &TestFixtures) -> Result<Vec<StoredPost>, HarnessError> {
        match self.phase {
            Phase::ServerUp | Phase::Clean => {}
            actual => {
                return Err(HarnessError::Phase {
                    operation: "seed",
                    actual,
                });
            }
        }

        let store = Arc::clone(&self.store);
        let drafts: Vec<_> = fixtures.posts.iter().map(|f| f.to_draft()).collect();

        let seeded = tokio::time::timeout(self.hook_timeout, async move {
            let mut seeded = Vec::with_capacity(drafts.len());
            for draft in drafts {
                seeded.push(store.create(draft).await?);
            }
            Ok::<_, quill_store::StoreError>(seeded)
        })
        .await
        .map_err(|_| HarnessError::HookTimedOut {
            hook: "seed",
            timeout: self.hook_timeout,
        })?
        .map_err(|e| HarnessError::Seed(e.to_string()))?;

        self.phase = Phase::Seeded;
        Ok(seeded)
    }

    /// Resets the whole database, returning the number of removed posts.
    ///
    /// This is the preferred cleanup policy: the next seed starts from
    /// zero regardless of what the test body created.
    pub async fn reset(&mut self) -> Result<u64, HarnessError> {
        if self.phase == Phase::NotStarted {
            return Err(HarnessError::Phase {
                operation: "reset",
                actual: self.phase,
            });
        }

        let store = Arc::clone(&self.store);
        let removed = tokio::time::timeout(self.hook_timeout, async move { store.clear().await })
            .await
            .map_err(|_| HarnessError::HookTimedOut {
                hook: "reset",
                timeout: self.hook_timeout,
            })?
            .map_err(|e| HarnessError::Cleanup(e.to_string()))?;

        self.phase = Phase::Clean;
        Ok(removed)
    }

    /// Removes only the posts carrying the given tag.
    ///
    /// Weaker alternative to [`reset`](Self::reset); only sound when
    /// every test uses a unique tag. Untagged posts survive, so the
    /// phase moves to `Clean` on the caller's assertion that nothing
    /// else was created.
    pub async fn clean_by_tag(&mut self, tag: &str) -> Result<u64, HarnessError> {
        if self.phase == Phase::NotStarted {
            return Err(HarnessError::Phase {
                operation: "clean_by_tag",
                actual: self.phase,
            });
        }

        let store = Arc::clone(&self.store);
        let tag = tag.to_string();
        let removed =
            tokio::time::timeout(self.hook_timeout, async move { store.delete_by_tag(&tag).await })
                .await
                .map_err(|_| HarnessError::HookTimedOut {
                    hook: "clean_by_tag",
                    timeout: self.hook_timeout,
                })?
                .map_err(|e| HarnessError::Cleanup(e.to_string()))?;

        self.phase = Phase::Clean;
        Ok(removed)
    }

    /// Number of posts currently in the database.
    pub async fn count(&self) -> u64 {
        self.store.count().await.expect("Failed to count posts")
    }

    /// Makes a GET request.
    pub async fn get(&self, path: &str) -> axum_test::TestResponse {
        self.server.get(path).await
    }

    /// Makes a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> axum_test::TestResponse {
        self.server.post(path).json(&body).await
    }

    /// Makes a PUT request with JSON body.
    pub async fn put(&self, path: &str, body: Value) -> axum_test::TestResponse {
        self.server.put(path).json(&body).await
    }

    /// Makes a DELETE request.
    pub async fn delete(&self, path: &str) -> axum_test::TestResponse {
        self.server.delete(path).await
    }

    /// Tears the server down.
    ///
    /// Dropping the harness has the same effect; this form just makes
    /// the end of the lifecycle visible in a test.
    pub fn shutdown(self) {
        drop(self);
    }
}

/// Error type for harness operations.
#[derive(Debug)]
pub enum HarnessError {
    /// Server or database could not be brought up.
    Setup(String),
    /// Seeding failed before the test body.
    Seed(String),
    /// Cleanup failed after the test body.
    Cleanup(String),
    /// A lifecycle hook did not complete within its timeout.
    HookTimedOut {
        /// The hook that stalled.
        hook: &'static str,
        /// The bound that was exceeded.
        timeout: Duration,
    },
    /// An operation was invoked in the wrong lifecycle phase.
    Phase {
        /// The operation that was attempted.
        operation: &'static str,
        /// The phase the harness was actually in.
        actual: Phase,
    },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessError::Setup(msg) => write!(f, "Setup failed: {}", msg),
            HarnessError::Seed(msg) => write!(f, "Seed failed: {}", msg),
            HarnessError::Cleanup(msg) => write!(f, "Cleanup failed: {}", msg),
            HarnessError::HookTimedOut { hook, timeout } => {
                write!(f, "Hook '{}' timed out after {:?}", hook, timeout)
            }
            HarnessError::Phase { operation, actual } => {
                write!(f, "Cannot {} in phase {:?}", operation, actual)
            }
        }
    }
}

impl std::error::Error for HarnessError {}
