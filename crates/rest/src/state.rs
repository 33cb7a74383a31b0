//! Application state for the Quill REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the document store and the server configuration.

use std::sync::Arc;

use quill_store::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The store type (must implement [`DocumentStore`])
///
/// # Example
///
/// ```rust,ignore
/// use quill_rest::{AppState, ServerConfig};
/// use quill_store::SqliteStore;
/// use std::sync::Arc;
///
/// let store = SqliteStore::in_memory()?;
/// let state = AppState::new(Arc::new(store), ServerConfig::default());
/// ```
pub struct AppState<S> {
    /// The document store.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the document store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a clone of the store Arc.
    pub fn store_arc(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
