//! Sample loading error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a sample document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to read the document from disk
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not a JSON array of samples
    #[error("Malformed sample document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for sample loading
pub type LoadResult<T> = Result<T, LoadError>;
