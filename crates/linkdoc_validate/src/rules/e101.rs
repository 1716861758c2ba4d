//! E101 (missing module): the header declares no module name.

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects records whose module identifier is empty.
pub struct MissingModule;

impl ValidationRule for MissingModule {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Error, 101)
    }

    fn name(&self) -> &str {
        "missing-module"
    }

    fn description(&self) -> &str {
        "header has no module name"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_record(&self, record: &HeaderRecord, _ctx: &ValidationContext, sink: &FindingSink) {
        if record.module.trim().is_empty() {
            sink.emit(
                self.finding(record, "missing module name")
                    .with_help("add a '# Module: <name>' line to the header"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::check;

    #[test]
    fn empty_module_fires() {
        let diags = check(&MissingModule, &HeaderRecord::new("", "a.go"));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].is_error());
        assert_eq!(diags[0].code.to_string(), "E101");
    }

    #[test]
    fn named_module_passes() {
        assert!(check(&MissingModule, &HeaderRecord::new("a.go", "a.go")).is_empty());
    }
}
