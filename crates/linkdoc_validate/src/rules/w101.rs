//! W101 (long description): the description exceeds the configured length.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects descriptions longer than `max_description_len` characters.
///
/// Length is counted in characters, not bytes.
pub struct LongDescription;

impl ValidationRule for LongDescription {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "long-description"
    }

    fn description(&self) -> &str {
        "description exceeds the configured length"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, ctx: &ValidationContext, sink: &FindingSink) {
        let len = record.description.chars().count();
        if len > ctx.max_description_len {
            sink.emit(self.finding(
                record,
                format!(
                    "description is too long ({len} chars, limit {})",
                    ctx.max_description_len
                ),
            ));
        }
    }
}
