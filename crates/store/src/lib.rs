//! # quill-store - Document persistence for the Quill blog server
//!
//! This crate provides the persistence layer for Quill: a small document
//! store holding blog posts as JSON documents. It defines the
//! [`DocumentStore`] trait and two backends:
//!
//! - [`SqliteStore`] - SQLite-backed, suitable for the server binary and
//!   for integration tests that want a real database
//! - [`MemoryStore`] - a HashMap behind an RwLock, for tests that want a
//!   trivially disposable backend
//!
//! ## Determinism contract
//!
//! Every mutating operation reports completion only once its effect is
//! visible to a subsequent read through the same store. Test fixtures
//! depend on this: a seed step followed by a request must observe the
//! seeded documents, and a cleanup step followed by the next seed must
//! observe an empty database.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use quill_store::{Author, DocumentStore, PostDraft, SqliteStore};
//!
//! let store = SqliteStore::open("quill.db")?;
//! store.init_schema()?;
//!
//! let draft = PostDraft::new("Hello", "First post", Author::new("Ada", "Lovelace"));
//! let stored = store.create(draft).await?;
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod error;
pub mod store;
pub mod types;

pub use backends::{MemoryStore, SqliteStore, SqliteStoreConfig};
pub use error::{StoreError, StoreResult};
pub use store::DocumentStore;
pub use types::{Author, PostDraft, StoredPost};
