//! Server configuration for the Quill REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUILL_PORT` | 8080 | Server port |
//! | `QUILL_HOST` | 127.0.0.1 | Host to bind |
//! | `QUILL_LOG_LEVEL` | info | Log level |
//! | `QUILL_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `QUILL_ENABLE_CORS` | true | Enable CORS |
//! | `QUILL_CORS_ORIGINS` | * | Allowed origins |
//! | `QUILL_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `QUILL_DATABASE_URL` | (none) | SQLite path, or `:memory:` |
//!
//! # Example
//!
//! ```rust
//! use quill_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the Quill REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "quilld")]
#[command(about = "Quill blog post server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "QUILL_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "QUILL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "QUILL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "QUILL_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "QUILL_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "QUILL_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "QUILL_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Database path, or `:memory:` for an in-memory database.
    #[arg(long, env = "QUILL_DATABASE_URL")]
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.base_url.is_empty() {
            errors.push("Base URL cannot be empty".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0, a short request timeout, and no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            base_url: "http://localhost:0".to_string(),
            database_url: Some(":memory:".to_string()),
        }
    }
}
