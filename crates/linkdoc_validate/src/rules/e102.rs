//! E102 (missing description): the header has no description line.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects records with an empty description.
pub struct MissingDescription;

impl ValidationRule for MissingDescription {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 102)
    }

    fn name(&self) -> &str {
        "missing-description"
    }

    fn description(&self) -> &str {
        "header has no description line"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        if record.description.is_empty() {
            sink.emit(
                self.finding(record, "missing description")
                    .with_help("add a one-line description after the module line"),
            );
        }
    }
}
