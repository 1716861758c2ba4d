//! Projection of header records into an index document.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use linkdoc_common::{relative_to, to_forward_slashes};
use linkdoc_parser::HeaderRecord;

use crate::model::{IndexDocument, IndexMetadata, LinkEntry, ModuleEntry};

/// Builds index documents relative to a repository root.
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    root: PathBuf,
}

impl IndexBuilder {
    /// Creates a builder that relativizes file paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Builds the document, stamped with the current time.
    pub fn build(&self, records: &[HeaderRecord]) -> IndexDocument {
        self.build_at(records, Utc::now())
    }

    /// Builds the document with an explicit generation time.
    ///
    /// Output is deterministic for identical inputs. When two records share a
    /// module name the later one wins; statistics still count every record.
    pub fn build_at(
        &self,
        records: &[HeaderRecord],
        generated_at: DateTime<Utc>,
    ) -> IndexDocument {
        let entries = records
            .iter()
            .map(|record| (record.module.clone(), self.project(record)))
            .collect();
        assemble(entries, generated_at)
    }

    /// Updates a previously built document after an incremental parse,
    /// stamped with the current time.
    ///
    /// See [`update_at`](Self::update_at).
    pub fn update(
        &self,
        previous: IndexDocument,
        records: &[HeaderRecord],
        unchanged: &[PathBuf],
    ) -> Option<IndexDocument> {
        self.update_at(previous, records, unchanged, Utc::now())
    }

    /// Merges freshly parsed `records` into `previous`.
    ///
    /// Entries of `previous` survive only when their file is listed in
    /// `unchanged`; entries for re-parsed, headerless, or deleted files are
    /// dropped and the fresh records take their place. The result equals a
    /// full build over every current record, statistics included.
    ///
    /// Returns `None` when `previous` hid colliding module names, since the
    /// overwritten entries cannot be recovered from it. Callers fall back to
    /// a full build.
    pub fn update_at(
        &self,
        previous: IndexDocument,
        records: &[HeaderRecord],
        unchanged: &[PathBuf],
        generated_at: DateTime<Utc>,
    ) -> Option<IndexDocument> {
        if previous.metadata.module_count != previous.modules.len() {
            tracing::debug!(
                "previous index has {} record(s) for {} module(s), rebuilding",
                previous.metadata.module_count,
                previous.modules.len()
            );
            return None;
        }

        let unchanged: HashSet<String> =
            unchanged.iter().map(|path| self.relative(path)).collect();
        let mut entries: Vec<(String, ModuleEntry)> = previous
            .modules
            .into_iter()
            .filter(|(_, entry)| unchanged.contains(&entry.file_path))
            .collect();
        let kept = entries.len();
        entries.extend(
            records
                .iter()
                .map(|record| (record.module.clone(), self.project(record))),
        );
        // Restore discovery order so last-write-wins matches a full build.
        entries.sort_by(|(_, a), (_, b)| Path::new(&a.file_path).cmp(Path::new(&b.file_path)));

        tracing::debug!(
            "kept {kept} unchanged index entries, merged {} re-parsed record(s)",
            records.len()
        );
        Some(assemble(entries, generated_at))
    }

    fn relative(&self, path: &Path) -> String {
        to_forward_slashes(&relative_to(path, &self.root))
    }

    fn project(&self, record: &HeaderRecord) -> ModuleEntry {
        ModuleEntry {
            description: record.description.clone(),
            file_path: self.relative(&record.file_path),
            links_to: record
                .linked_modules
                .iter()
                .map(|link| LinkEntry {
                    name: link.name.clone(),
                    path: link.path.clone(),
                    relationship: link.relationship.clone(),
                })
                .collect(),
            exports: record.exports.clone(),
            tags: record.tags.clone(),
            lines_of_code: record.line_count,
            last_modified: record.last_modified,
            has_rdf: record.has_rdf(),
        }
    }
}

/// Inserts entries in order (later duplicates win) and computes statistics
/// over every entry, overwritten ones included.
fn assemble(entries: Vec<(String, ModuleEntry)>, generated_at: DateTime<Utc>) -> IndexDocument {
    let module_count = entries.len();
    let total_loc: usize = entries.iter().map(|(_, entry)| entry.lines_of_code).sum();
    let modules_with_rdf = entries.iter().filter(|(_, entry)| entry.has_rdf).count();
    let avg_loc = if module_count > 0 {
        total_loc / module_count
    } else {
        0
    };

    let mut modules = BTreeMap::new();
    for (module, entry) in entries {
        let file_path = entry.file_path.clone();
        if let Some(previous) = modules.insert(module.clone(), entry) {
            tracing::debug!(
                "module '{module}' from {file_path} replaces the entry from {}",
                previous.file_path
            );
        }
    }

    IndexDocument {
        metadata: IndexMetadata {
            generated_at,
            module_count,
            total_loc,
            avg_loc,
            modules_with_rdf,
        },
        modules,
    }
}
