//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur while persisting the cache.
///
/// Loading never fails (corruption is a cache miss), so these only surface
/// from [`HashCache::save`](crate::HashCache::save).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// An I/O error occurred while writing cache files.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
