//! Parsing many files at once, optionally skipping unchanged ones.

use std::path::PathBuf;

use linkdoc_cache::HashCache;

use crate::error::ParseError;
use crate::record::HeaderRecord;
use crate::source::read_source;

/// A file that could not be read during a batch.
#[derive(Debug)]
pub struct FileFailure {
    /// The file that failed.
    pub path: PathBuf,
    /// Why it failed.
    pub error: ParseError,
}

/// The outcome of [`parse_batch`].
///
/// Every input path lands in exactly one of `skipped`, `failures`, or
/// `parsed`; parsed files are further split into `records` and `headerless`.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records for files that declared a module, in input order.
    pub records: Vec<HeaderRecord>,
    /// Files that were read and parsed this run.
    pub parsed: Vec<PathBuf>,
    /// Files skipped because their hash matched the cache.
    pub skipped: Vec<PathBuf>,
    /// Parsed files with no module declaration.
    pub headerless: Vec<PathBuf>,
    /// Files that could not be read.
    pub failures: Vec<FileFailure>,
}

/// Parses each path in order.
///
/// With a cache, files whose content hash matches their recorded entry are
/// skipped and every file that was read successfully has its hash recorded,
/// headerless files included. A file that fails to read is reported and
/// never aborts the batch. The (updated) cache is handed back for the caller
/// to persist.
pub fn parse_batch(
    paths: &[PathBuf],
    mut cache: Option<HashCache>,
) -> (BatchReport, Option<HashCache>) {
    let mut report = BatchReport::default();

    for path in paths {
        let source = match read_source(path) {
            Ok(source) => source,
            Err(error) => {
                tracing::warn!("{error}");
                report.failures.push(FileFailure {
                    path: path.clone(),
                    error,
                });
                continue;
            }
        };

        if let Some(cache) = &cache {
            if cache.is_unchanged(path, &source.content_hash) {
                tracing::debug!("unchanged, skipping {}", path.display());
                report.skipped.push(path.clone());
                continue;
            }
        }

        report.parsed.push(path.clone());
        match crate::parse_source(&source) {
            Some(record) => {
                tracing::debug!("parsed module '{}' from {}", record.module, path.display());
                report.records.push(record);
            }
            None => {
                tracing::debug!("no header in {}", path.display());
                report.headerless.push(path.clone());
            }
        }

        if let Some(cache) = &mut cache {
            cache.record(path, source.content_hash);
        }
    }

    tracing::info!(
        "parsed {} file(s): {} header(s), {} skipped, {} failed",
        report.parsed.len(),
        report.records.len(),
        report.skipped.len(),
        report.failures.len()
    );
    (report, cache)
}
