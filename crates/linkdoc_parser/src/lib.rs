//! Header extraction for LinkedDoc-annotated source files.
//!
//! A LinkedDoc header is the first multi-line block comment in a file that
//! declares `# Module: <name>`. Inside it, a description line, link items,
//! tag and export lists, and an optional raw metadata block are recognized.
//! Parsing is total: malformed lines are skipped and files without a module
//! declaration yield no record.
//!
//! # Architecture
//!
//! - **Lines** ([`line`]): classifies trimmed header lines.
//! - **Machine** ([`machine`]): a `State` x `Section` state machine fed one
//!   line at a time.
//! - **Batch** ([`batch`]): parses many files, skipping unchanged ones when
//!   given a [`HashCache`](linkdoc_cache::HashCache).

#![warn(missing_docs)]

/// Batch parsing with incremental skipping.
pub mod batch;
pub mod error;
/// Classification of header lines.
pub mod line;
pub mod machine;
pub mod record;
/// Reading files into memory.
pub mod source;

pub use batch::{parse_batch, BatchReport, FileFailure};
pub use error::ParseError;
pub use machine::{HeaderMachine, Section, State};
pub use record::{HeaderRecord, LinkRef};
pub use source::{read_source, SourceText};

use std::path::Path;

/// Extracts the header record from an in-memory source.
///
/// Returns `None` when the file declares no module.
pub fn parse_source(source: &SourceText) -> Option<HeaderRecord> {
    let mut machine = HeaderMachine::new();
    for line in source.text.lines() {
        machine.feed(line);
        if machine.is_done() {
            break;
        }
    }
    let fields = machine.finish()?;
    Some(HeaderRecord {
        module: fields.module,
        description: fields.description,
        linked_modules: fields.linked_modules,
        tags: fields.tags,
        exports: fields.exports,
        rdf_block: fields.rdf_block,
        file_path: source.path.clone(),
        line_count: source.line_count,
        last_modified: source.last_modified,
        content_hash: source.content_hash,
    })
}

/// Reads and parses a single file.
///
/// Returns `Ok(None)` for a readable file without a header.
pub fn parse_file(path: &Path) -> Result<Option<HeaderRecord>, ParseError> {
    let source = read_source(path)?;
    Ok(parse_source(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn source(text: &str) -> SourceText {
        SourceText::from_bytes("handlers/location.go", text.as_bytes(), Utc::now())
    }

    #[test]
    fn record_carries_file_facts() {
        let src = source("package x\n\n/*\n# Module: x\nDoes x.\n*/\n\nfunc X() {}\n");
        let record = parse_source(&src).unwrap();
        assert_eq!(record.module, "x");
        assert_eq!(record.description, "Does x.");
        assert_eq!(record.line_count, 8);
        assert_eq!(record.file_path, Path::new("handlers/location.go"));
        assert_eq!(record.content_hash, src.content_hash);
        assert_eq!(record.last_modified, src.last_modified);
    }

    #[test]
    fn line_count_covers_whole_file_after_header() {
        let mut text = String::from("/*\n# Module: x\n*/\n");
        for i in 0..50 {
            text.push_str(&format!("line {i}\n"));
        }
        assert_eq!(parse_source(&source(&text)).unwrap().line_count, 53);
    }

    #[test]
    fn headerless_source_is_none() {
        assert!(parse_source(&source("package x\n// just code\n")).is_none());
    }

    #[test]
    fn parsing_is_deterministic() {
        let src = source("/*\n# Module: x\n## Tags\nhttp, api\n*/\n");
        assert_eq!(parse_source(&src), parse_source(&src));
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.go");
        std::fs::write(&path, "/*\n# Module: main.go\nEntry point.\n*/\n").unwrap();
        let record = parse_file(&path).unwrap().unwrap();
        assert_eq!(record.module, "main.go");
        assert_eq!(record.file_path, path);
    }

    #[test]
    fn parse_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parse_file(&dir.path().join("nope.go")).is_err());
    }
}
