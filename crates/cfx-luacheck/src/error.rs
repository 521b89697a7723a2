//! Error types for catalog fetching, name normalization and config generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a luacheck configuration.
#[derive(Error, Debug)]
pub enum LintError {
    /// A catalog name cannot be turned into a Lua identifier.
    #[error("Invalid function name '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    /// A filesystem operation failed (config write, catalog read, directory scan).
    #[error("I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fetching a remote catalog failed.
    #[error("Failed to fetch {what}: {message}")]
    Network { what: String, message: String },

    /// A catalog body did not have the expected namespace → hash → entry shape.
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    /// A configured path does not exist or has the wrong type.
    #[error("Invalid path '{}': {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// The external linter could not be started.
    #[error("Failed to start subprocess '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl LintError {
    pub(crate) fn invalid_identifier(name: &str, reason: impl Into<String>) -> Self {
        LintError::InvalidIdentifier {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout cfx-luacheck.
pub type Result<T> = std::result::Result<T, LintError>;
