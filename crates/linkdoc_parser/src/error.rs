//! Error types for header parsing.

use std::path::{Path, PathBuf};

/// Errors that can occur while reading a source file.
///
/// Malformed header content is never an error; unrecognized lines are
/// skipped and a file without a module declaration simply has no record.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl ParseError {
    /// Returns the path of the file the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            ParseError::Io { path, .. } => path,
        }
    }
}
