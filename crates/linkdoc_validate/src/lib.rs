//! Validation rules and engine for LinkedDoc headers.
//!
//! This crate checks a parsed collection of [`HeaderRecord`]s for structural
//! completeness, resolvable links, known tags, and well-formed embedded
//! metadata, producing [`Finding`]s collected into a [`ValidationReport`].
//!
//! # Rule Categories
//!
//! - **E-series (errors):** Missing module or description, broken links, metadata
//!   missing required markers
//! - **W-series (warnings):** Long descriptions, missing exports or tags, empty
//!   relationships, unknown tags, missing or mismatched metadata, duplicate
//!   modules, dependency cycles

#![warn(missing_docs)]

mod context;
mod engine;
mod helpers;
mod report;
mod rules;

pub use context::ValidationContext;
pub use engine::Validator;
pub use helpers::{is_entry_point, resolve_link};
pub use report::ValidationReport;
pub use rules::register_builtin_rules;
pub use rules::{
    BrokenLink, DependencyCycle, DuplicateModule, EmptyRelationship, LongDescription,
    MissingDescription, MissingModule, MissingRdf, NoExports, NoTags, RdfMissingMarker,
    RdfNameMismatch, UnknownTag,
};

use linkdoc_diagnostics::{DiagnosticCode, Finding, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

/// A single validation rule.
///
/// Each rule has a unique diagnostic code, a kebab-case name, a description,
/// and a default severity. Most rules look at one record at a time through
/// [`check_record`](Self::check_record); rules that need the whole
/// collection implement [`check_collection`](Self::check_collection), which
/// runs once after every record has been checked.
pub trait ValidationRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., E103, W105).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "broken-link").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for findings emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks a single record and emits findings to the sink.
    fn check_record(&self, _record: &HeaderRecord, _ctx: &ValidationContext, _sink: &FindingSink) {
    }

    /// Checks the whole collection and emits findings to the sink.
    fn check_collection(
        &self,
        _records: &[HeaderRecord],
        _ctx: &ValidationContext,
        _sink: &FindingSink,
    ) {
    }

    /// Builds a finding at this rule's default severity.
    fn finding(&self, record: &HeaderRecord, message: impl Into<String>) -> Finding
    where
        Self: Sized,
    {
        Finding::new(
            self.default_severity(),
            self.code(),
            self.name(),
            record.file_path.clone(),
            message,
        )
    }
}
