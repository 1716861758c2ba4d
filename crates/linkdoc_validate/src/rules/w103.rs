//! W103 (no tags): the header declares no tags.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects headers with an empty tag list.
pub struct NoTags;

impl ValidationRule for NoTags {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 103)
    }

    fn name(&self) -> &str {
        "no-tags"
    }

    fn description(&self) -> &str {
        "header declares no tags"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        if record.tags.is_empty() {
            sink.emit(self.finding(record, "no tags specified"));
        }
    }
}
