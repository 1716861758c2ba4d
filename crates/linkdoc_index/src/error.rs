//! Error types for index output.

use std::path::PathBuf;

/// Errors that can occur while writing or reading an index document.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// An I/O error occurred while accessing the index file or its directory.
    #[error("index I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document could not be encoded or decoded as JSON.
    #[error("invalid index JSON at {path}: {source}")]
    Json {
        /// The index file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}
