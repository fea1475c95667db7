//! Error types for unindent-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the unindent engine
    #[error("{source_name}: {error}")]
    Unindent {
        source_name: String,
        #[source]
        error: unindent_core::Error,
    },

    /// Invalid options resolved from config and flags
    #[error(transparent)]
    Options(#[from] unindent_core::Error),

    /// I/O error on a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard I/O error without a path (stdin/stdout)
    #[error(transparent)]
    Stdio(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unindent(source_name: impl Into<String>, error: unindent_core::Error) -> Self {
        Self::Unindent {
            source_name: source_name.into(),
            error,
        }
    }
}
