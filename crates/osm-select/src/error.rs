//! Error types for osm-select

use std::path::PathBuf;

/// Result type for osm-select operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or resolving directives
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Root directory not found: {root}")]
    RootNotFound { root: PathBuf },

    #[error("Root directory is not valid UTF-8 and cannot anchor glob patterns: {root}")]
    NonUtf8Root { root: PathBuf },

    #[error("Invalid pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },

    #[error("Invalid directive at entry {line}: {text:?} ({reason})")]
    InvalidDirective {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("Failed to expand {pattern:?} at {path}: {source}")]
    Expansion {
        pattern: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn expansion(
        pattern: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Expansion {
            pattern: pattern.into(),
            path: path.into(),
            source,
        }
    }
}
