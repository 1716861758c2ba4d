//! Reading source files into memory.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use linkdoc_common::ContentHash;

use crate::error::ParseError;

/// The contents of one source file plus the file-level facts a record needs.
#[derive(Clone, Debug)]
pub struct SourceText {
    /// The path as supplied by the caller.
    pub path: PathBuf,
    /// The file contents, lossily decoded as UTF-8.
    pub text: String,
    /// Hash of the raw bytes.
    pub content_hash: ContentHash,
    /// Number of lines in the file.
    pub line_count: usize,
    /// Modification time of the file.
    pub last_modified: DateTime<Utc>,
}

impl SourceText {
    /// Builds a source from raw bytes.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, so binary
    /// junk in a scanned tree degrades to a headerless file.
    pub fn from_bytes(
        path: impl Into<PathBuf>,
        bytes: &[u8],
        last_modified: DateTime<Utc>,
    ) -> Self {
        let text = String::from_utf8_lossy(bytes).into_owned();
        Self {
            path: path.into(),
            line_count: text.lines().count(),
            content_hash: ContentHash::from_bytes(bytes),
            text,
            last_modified,
        }
    }
}

/// Reads `path` from disk.
pub fn read_source(path: &Path) -> Result<SourceText, ParseError> {
    let bytes = std::fs::read(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let last_modified = match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(time) => DateTime::<Utc>::from(time),
        Err(e) => {
            tracing::debug!("no modification time for {} ({e}), using now", path.display());
            Utc::now()
        }
    };
    Ok(SourceText::from_bytes(path, &bytes, last_modified))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_ignores_trailing_newline() {
        let source = SourceText::from_bytes("a.go", b"one\ntwo\nthree\n", Utc::now());
        assert_eq!(source.line_count, 3);
        let source = SourceText::from_bytes("a.go", b"one\ntwo\nthree", Utc::now());
        assert_eq!(source.line_count, 3);
        let source = SourceText::from_bytes("a.go", b"", Utc::now());
        assert_eq!(source.line_count, 0);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let source = SourceText::from_bytes("bin.go", &[b'a', 0xff, b'\n', b'b'], Utc::now());
        assert_eq!(source.line_count, 2);
        assert!(source.text.contains('\u{fffd}'));
    }

    #[test]
    fn hash_covers_raw_bytes() {
        let a = SourceText::from_bytes("a.go", b"same", Utc::now());
        let b = SourceText::from_bytes("b.go", b"same", Utc::now());
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn read_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.go");
        let err = read_source(&missing).unwrap_err();
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.go");
        std::fs::write(&path, "package a\n").unwrap();
        let source = read_source(&path).unwrap();
        assert_eq!(source.path, path);
        assert_eq!(source.line_count, 1);
        assert_eq!(source.content_hash, ContentHash::from_bytes(b"package a\n"));
    }
}
