//! W107 (RDF name mismatch): `code:name` does not mention the module.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects metadata whose `code:name` value doesn't contain the module name.
///
/// This is a textual heuristic: the text after the first `code:name` on its
/// line must contain the module string. Blocks without `code:name` are left
/// to `rdf-missing-marker`.
pub struct RdfNameMismatch;

impl ValidationRule for RdfNameMismatch {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 107)
    }

    fn name(&self) -> &str {
        "rdf-name-mismatch"
    }

    fn description(&self) -> &str {
        "metadata name may not match the module"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        let Some(rdf) = record.rdf_block.as_deref() else {
            return;
        };
        let Some(value) = rdf
            .lines()
            .find_map(|line| line.split_once("code:name").map(|(_, rest)| rest))
        else {
            return;
        };
        if !value.contains(record.module.as_str()) {
            sink.emit(
                self.finding(record, "RDF module name may not match header")
                    .with_help(format!("expected code:name \"{}\"", record.module)),
            );
        }
    }
}
