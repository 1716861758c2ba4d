//! W106 (missing RDF): the header carries no embedded metadata block.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects headers without an embedded metadata block.
pub struct MissingRdf;

impl ValidationRule for MissingRdf {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 106)
    }

    fn name(&self) -> &str {
        "missing-rdf"
    }

    fn description(&self) -> &str {
        "header has no embedded metadata block"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        if !record.has_rdf() {
            sink.emit(self.finding(record, "no RDF metadata found"));
        }
    }
}
