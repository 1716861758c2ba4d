//! W102 (no exports): a non-entry-point file lists no exports.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::helpers::is_entry_point;
use crate::{ValidationContext, ValidationRule};

/// Detects headers with no exports.
///
/// Files whose name ends with one of the configured entry-point suffixes are
/// exempt.
pub struct NoExports;

impl ValidationRule for NoExports {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 102)
    }

    fn name(&self) -> &str {
        "no-exports"
    }

    fn description(&self) -> &str {
        "header lists no exports"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, ctx: &ValidationContext, sink: &FindingSink) {
        if record.exports.is_empty() && !is_entry_point(record, &ctx.entry_points) {
            sink.emit(self.finding(record, "no exports listed (is this intentional?)"));
        }
    }
}
