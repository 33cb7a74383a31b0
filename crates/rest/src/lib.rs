//! # quill-rest - REST API for the Quill blog server
//!
//! This crate implements the HTTP layer of Quill: a small JSON API for
//! creating, reading, updating, and deleting blog posts backed by a
//! [`quill_store::DocumentStore`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quill_rest::{create_app, ServerConfig};
//! use quill_store::SqliteStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::open("quill.db")?;
//!     store.init_schema()?;
//!
//!     let app = create_app(Arc::new(store));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern |
//! |-------------|-------------|-------------|
//! | list | GET | `/posts` |
//! | create | POST | `/posts` |
//! | read | GET | `/posts/{id}` |
//! | update | PUT | `/posts/{id}` |
//! | delete | DELETE | `/posts/{id}` |
//! | health | GET | `/health` |
//!
//! ## Error Handling
//!
//! Errors are returned as JSON bodies of the form
//! `{"error": "<code>", "message": "<details>"}` with appropriate HTTP
//! status codes:
//!
//! | HTTP Status | Error Code | Description |
//! |-------------|------------|-------------|
//! | 400 | invalid | Malformed body / validation error |
//! | 404 | not-found | Post not found |
//! | 409 | conflict | Post with that ID already exists |
//! | 500 | internal | Internal server error |
//! | 503 | unavailable | Database unreachable |
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUILL_PORT` | 8080 | Server port |
//! | `QUILL_HOST` | 127.0.0.1 | Host to bind |
//! | `QUILL_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `QUILL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `QUILL_ENABLE_CORS` | true | Enable CORS |
//! | `QUILL_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `QUILL_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `QUILL_DATABASE_URL` | (none) | SQLite path, or `:memory:` |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (store, configuration)
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{ApiError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use quill_store::DocumentStore;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(store: Arc<S>) -> Router
where
    S: DocumentStore + 'static,
{
    create_app_with_config(store, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// The store is taken as an `Arc` so callers (the server binary, test
/// harnesses) can keep a handle to the same store the app serves from.
///
/// # Example
///
/// ```rust,ignore
/// use quill_rest::{create_app_with_config, ServerConfig};
/// use quill_store::SqliteStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(SqliteStore::in_memory()?);
/// let config = ServerConfig {
///     port: 3000,
///     ..Default::default()
/// };
/// let app = create_app_with_config(store, config);
/// ```
pub fn create_app_with_config<S>(store: Arc<S>, config: ServerConfig) -> Router
where
    S: DocumentStore + 'static,
{
    info!("Creating REST server with backend: {}", store.backend_name());

    let state = AppState::new(store, config.clone());

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quill_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
