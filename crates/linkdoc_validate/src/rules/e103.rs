//! E103 (broken link): a linked path does not exist.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::helpers::resolve_link;
use crate::{ValidationContext, ValidationRule};

/// Detects links whose target does not exist on disk.
///
/// The path is resolved against the declaring file's directory and
/// normalized lexically. Only a definite "not found" counts as broken; a
/// target that cannot be checked (e.g. permission denied) is not reported.
pub struct BrokenLink;

impl ValidationRule for BrokenLink {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 103)
    }

    fn name(&self) -> &str {
        "broken-link"
    }

    fn description(&self) -> &str {
        "linked module path does not exist"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        for link in &record.linked_modules {
            let resolved = resolve_link(record, link);
            if matches!(resolved.try_exists(), Ok(false)) {
                sink.emit(self.finding(
                    record,
                    format!(
                        "broken link to '{}' (resolved to: {})",
                        link.name,
                        resolved.display()
                    ),
                ));
            } else {
                tracing::trace!("link ok: {} -> {}", link.name, link.path);
            }
        }
    }
}
