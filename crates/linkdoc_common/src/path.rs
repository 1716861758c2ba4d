//! Lexical path helpers shared by link resolution and index output.
//!
//! None of these functions touch the file system: they operate purely on path
//! components so results are stable whether or not the target exists.

use std::path::{Component, Path, PathBuf};

/// Collapses `.` and `..` components without consulting the file system.
///
/// A `..` directly under the root is dropped, a leading `..` on a relative
/// path is preserved, and an empty result becomes `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Expresses `path` relative to `root` when it lies underneath it.
///
/// Paths outside `root` are returned unchanged.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    let path = normalize_lexically(path);
    let root = normalize_lexically(root);
    match path.strip_prefix(&root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path,
    }
}

/// Renders a path with `/` separators regardless of the host convention.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
