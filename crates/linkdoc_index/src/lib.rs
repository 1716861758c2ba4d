//! Aggregated JSON index over LinkedDoc headers.
//!
//! [`IndexBuilder`] projects parsed records into an [`IndexDocument`]: one
//! entry per module, keyed by module name, plus repository-wide statistics.
//! [`write_index`] persists it as pretty-printed JSON.

#![warn(missing_docs)]

mod builder;
pub mod error;
pub mod model;
mod tags;
mod writer;

pub use builder::IndexBuilder;
pub use error::IndexError;
pub use model::{IndexDocument, IndexMetadata, LinkEntry, ModuleEntry, TIMESTAMP_FORMAT};
pub use tags::tag_index;
pub use writer::{read_index, write_index};
