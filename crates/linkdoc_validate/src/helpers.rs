//! Record inspection helpers shared by several rules.

use std::path::{Path, PathBuf};

use linkdoc_common::normalize_lexically;
use linkdoc_parser::{HeaderRecord, LinkRef};

/// Resolves a link's path against the directory of the file declaring it.
///
/// The result is absolute and lexically normalized; symlinks are not
/// followed.
pub fn resolve_link(record: &HeaderRecord, link: &LinkRef) -> PathBuf {
    absolute_normalized(&record.base_dir().join(&link.path))
}

/// Makes `path` absolute against the working directory and normalizes it.
pub(crate) fn absolute_normalized(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(absolute) => normalize_lexically(&absolute),
        Err(_) => normalize_lexically(path),
    }
}

/// Returns `true` if the record's path ends with one of `entry_points`.
///
/// Matching is by whole path components, so `main.go` matches
/// `cmd/main.go` but not `domain.go`, and `cmd/main.go` matches
/// `app/cmd/main.go`.
pub fn is_entry_point(record: &HeaderRecord, entry_points: &[String]) -> bool {
    entry_points
        .iter()
        .filter(|entry| !entry.is_empty())
        .any(|entry| record.file_path.ends_with(Path::new(entry)))
}
