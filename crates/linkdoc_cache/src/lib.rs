//! Incremental run cache management.
//!
//! This crate provides the content-hash cache that lets an incremental run
//! skip files whose bytes have not changed since the previous run. The cache
//! is advisory: a missing or corrupt cache file degrades to "everything
//! changed", never to an error.

#![warn(missing_docs)]

pub mod cache;
pub mod error;

pub use cache::HashCache;
pub use error::CacheError;
