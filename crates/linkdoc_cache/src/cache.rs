//! The file-hash cache used by incremental runs.
//!
//! The on-disk format is plain text with one entry per line:
//! `<file-path>\t<content-hash>`. Entries are written sorted by path so the
//! file is stable across runs. Malformed lines are skipped individually.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use linkdoc_common::ContentHash;

use crate::error::CacheError;

/// Maps each source file to the content hash recorded on its last parse.
///
/// The cache is a single-owner value scoped to one run: load it at the start,
/// [`record`](Self::record) hashes as files are parsed, and [`save`](Self::save)
/// it once at the end.
#[derive(Debug, Clone)]
pub struct HashCache {
    /// Location of the cache file on disk.
    path: PathBuf,

    /// Recorded hashes keyed by the path as supplied by the enumerator.
    entries: BTreeMap<PathBuf, ContentHash>,
}

impl HashCache {
    /// Creates an empty cache that will be saved to `path`.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        }
    }

    /// Loads the cache from `path`.
    ///
    /// This is fail-safe: a missing, unreadable, or non-UTF-8 file yields an
    /// empty cache, and malformed lines are skipped.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no hash cache at {}, starting fresh", path.display());
                return Self::new(path);
            }
            Err(e) => {
                tracing::warn!(
                    "hash cache at {} is unreadable ({e}), treating all files as changed",
                    path.display()
                );
                return Self::new(path);
            }
        };

        let mut cache = Self::new(path);
        let mut skipped = 0usize;
        for line in content.lines() {
            match parse_line(line) {
                Some((file, hash)) => {
                    cache.entries.insert(file, hash);
                }
                None if line.trim().is_empty() => {}
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(
                "skipped {skipped} malformed line(s) in hash cache {}",
                path.display()
            );
        }
        tracing::debug!(
            "loaded {} cache entries from {}",
            cache.entries.len(),
            path.display()
        );
        cache
    }

    /// Returns `true` if `file` was recorded with exactly `hash`.
    pub fn is_unchanged(&self, file: &Path, hash: &ContentHash) -> bool {
        self.entries.get(file) == Some(hash)
    }

    /// Returns the recorded hash for `file`, if any.
    pub fn get(&self, file: &Path) -> Option<ContentHash> {
        self.entries.get(file).copied()
    }

    /// Records (or replaces) the hash for `file`.
    pub fn record(&mut self, file: &Path, hash: ContentHash) {
        self.entries.insert(file.to_path_buf(), hash);
    }

    /// Removes the entry for `file`, returning its previous hash.
    pub fn remove(&mut self, file: &Path) -> Option<ContentHash> {
        self.entries.remove(file)
    }

    /// Drops entries for files not in `live`, returning how many were removed.
    ///
    /// Used after discovery so deleted files do not accumulate in the cache.
    pub fn retain_paths(&mut self, live: &[PathBuf]) -> usize {
        let live: HashSet<&Path> = live.iter().map(PathBuf::as_path).collect();
        let before = self.entries.len();
        self.entries.retain(|path, _| live.contains(path.as_path()));
        before - self.entries.len()
    }

    /// Drops entries whose hash differs from (or is missing in) `other`,
    /// returning how many were removed.
    ///
    /// Used when one run must honor two caches: a file is only skipped if
    /// both agree on its content.
    pub fn retain_agreeing(&mut self, other: &HashCache) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|path, hash| other.entries.get(path) == Some(&*hash));
        before - self.entries.len()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cache file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the cache atomically.
    ///
    /// Writes a sibling temporary file and renames it over the cache file, so
    /// readers see either the old or the new cache, never a partial one.
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<(), CacheError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| CacheError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let mut out = String::new();
        for (file, hash) in &self.entries {
            let Some(file_str) = file.to_str() else {
                tracing::warn!("not caching non-UTF-8 path {}", file.display());
                continue;
            };
            if file_str.contains(['\t', '\n', '\r']) {
                tracing::warn!("not caching path with control characters: {file_str:?}");
                continue;
            }
            out.push_str(file_str);
            out.push('\t');
            out.push_str(&hash.to_string());
            out.push('\n');
        }

        let mut tmp_name = self.path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, out).map_err(|e| CacheError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| CacheError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(
            "wrote {} cache entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Parses one `<path>\t<hash>` line, returning `None` if it is malformed.
fn parse_line(line: &str) -> Option<(PathBuf, ContentHash)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (file, hash) = line.split_once('\t')?;
    if file.is_empty() {
        return None;
    }
    let hash = ContentHash::from_hex(hash).ok()?;
    Some((PathBuf::from(file), hash))
}
