//! W105 (unknown tag): a tag outside the configured vocabulary.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects tags missing from the taxonomy. Each occurrence is reported.
pub struct UnknownTag;

impl ValidationRule for UnknownTag {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 105)
    }

    fn name(&self) -> &str {
        "unknown-tag"
    }

    fn description(&self) -> &str {
        "tag is not in the taxonomy"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, ctx: &ValidationContext, sink: &FindingSink) {
        for tag in record.tags.iter().filter(|tag| !ctx.is_known_tag(tag)) {
            sink.emit(
                self.finding(record, format!("unknown tag '{tag}' (not in taxonomy)"))
                    .with_help("add it under [taxonomy] extra in linkdoc.toml"),
            );
        }
    }
}
