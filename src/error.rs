//! Error types for scope discovery.

use thiserror::Error;

/// Scope discovery and config resolution error.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Failed to read config file {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type alias for scope operations.
pub type Result<T> = std::result::Result<T, ScopeError>;
