//! Error types for envy-core

use thiserror::Error;

/// Result type alias using envy-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Envy
#[derive(Error, Debug)]
pub enum Error {
    /// No workspace found from the starting directory upward
    #[error("No envy workspace found (searched {start} and parent directories)")]
    WorkspaceNotFound { start: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration format: {message}")]
    InvalidConfig { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a workspace not found error
    pub fn workspace_not_found(start: impl Into<String>) -> Self {
        Self::WorkspaceNotFound {
            start: start.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
