//! The structured records produced by header parsing.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use linkdoc_common::ContentHash;

/// A declared dependency edge from one file's header to another file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRef {
    /// Display identifier of the target module.
    pub name: String,
    /// Relative path to the target, resolved against the owning file's directory.
    pub path: String,
    /// Why the link exists. May be empty.
    pub relationship: String,
}

impl LinkRef {
    /// Creates a link reference.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            relationship: relationship.into(),
        }
    }
}

/// The parsed documentation header of one source file.
///
/// List fields preserve declaration order and keep duplicates. The last four
/// fields describe the whole file rather than the header text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderRecord {
    /// Module identifier; the unique key in the index.
    pub module: String,
    /// Single-line description. Empty when the header has none.
    pub description: String,
    /// Declared links, in declaration order.
    pub linked_modules: Vec<LinkRef>,
    /// Declared tags, in declaration order.
    pub tags: Vec<String>,
    /// Declared exports, in declaration order.
    pub exports: Vec<String>,
    /// Raw embedded metadata block, never parsed.
    pub rdf_block: Option<String>,
    /// The file path as supplied by the enumerator.
    pub file_path: PathBuf,
    /// Number of lines in the whole file.
    pub line_count: usize,
    /// File modification time at parse time.
    pub last_modified: DateTime<Utc>,
    /// Hash of the whole file's bytes.
    pub content_hash: ContentHash,
}

impl HeaderRecord {
    /// Creates a record with the given module and path and every other field empty.
    pub fn new(module: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            module: module.into(),
            description: String::new(),
            linked_modules: Vec::new(),
            tags: Vec::new(),
            exports: Vec::new(),
            rdf_block: None,
            file_path: file_path.into(),
            line_count: 0,
            last_modified: DateTime::<Utc>::default(),
            content_hash: ContentHash::from_bytes(&[]),
        }
    }

    /// Returns `true` if the header carries a non-empty embedded metadata block.
    pub fn has_rdf(&self) -> bool {
        self.rdf_block.as_deref().is_some_and(|rdf| !rdf.is_empty())
    }

    /// Returns the directory containing the file, against which links resolve.
    pub fn base_dir(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new(""))
    }
}
