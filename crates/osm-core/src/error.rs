//! Error types for osm-core

use std::path::PathBuf;

/// Result type for osm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in osm-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Directive parsing or resolution failed
    #[error(transparent)]
    Select(#[from] osm_select::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to render config as {format}: {message}")]
    ConfigSerialize { format: String, message: String },

    #[error("Unsupported config format: {extension:?} (expected json, toml, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
