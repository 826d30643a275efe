//! Error types for envy-templates

use thiserror::Error;

/// Result type alias using envy-templates's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Template management error types
#[derive(Error, Debug)]
pub enum Error {
    /// Template not found in the templates directory
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template name already taken
    #[error("Template named '{name}' already exists in the templates directory")]
    TemplateExists { name: String },

    /// Source file to register does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Registration list file missing
    #[error("Template registry not found: {path}")]
    RegistryNotFound { path: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }

    /// Create a template exists error
    pub fn template_exists(name: impl Into<String>) -> Self {
        Self::TemplateExists { name: name.into() }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a registry not found error
    pub fn registry_not_found(path: impl Into<String>) -> Self {
        Self::RegistryNotFound { path: path.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }
}
