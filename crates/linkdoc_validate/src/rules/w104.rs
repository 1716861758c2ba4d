//! W104 (empty relationship): a link does not say why it exists.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects links with an empty relationship description.
pub struct EmptyRelationship;

impl ValidationRule for EmptyRelationship {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 104)
    }

    fn name(&self) -> &str {
        "empty-relationship"
    }

    fn description(&self) -> &str {
        "link has no relationship description"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        for link in record
            .linked_modules
            .iter()
            .filter(|link| link.relationship.is_empty())
        {
            sink.emit(
                self.finding(
                    record,
                    format!("link to '{}' has no relationship description", link.name),
                )
                .with_help(format!("write '- [{}]({}): <why>'", link.name, link.path)),
            );
        }
    }
}
