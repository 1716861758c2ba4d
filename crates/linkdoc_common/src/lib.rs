//! Shared foundational types used across the linkdoc toolchain.
//!
//! This crate provides content hashing for change detection and the path
//! helpers that link resolution and index relativization both depend on.

#![warn(missing_docs)]

pub mod hash;
pub mod path;

pub use hash::{ContentHash, ParseHashError};
pub use path::{normalize_lexically, relative_to, to_forward_slashes};
