//! W108 (duplicate module): several files declare the same module name.

use std::collections::BTreeMap;

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::{ValidationContext, ValidationRule};

/// Detects module names declared by more than one file.
///
/// The index keeps only the last such record, so each colliding file gets a
/// warning naming the others.
pub struct DuplicateModule;

impl ValidationRule for DuplicateModule {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 108)
    }

    fn name(&self) -> &str {
        "duplicate-module"
    }

    fn description(&self) -> &str {
        "module name is declared by more than one file"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_collection(
        &self,
        records: &[HeaderRecord],
        _ctx: &ValidationContext,
        sink: &FindingSink,
    ) {
        let mut by_module: BTreeMap<&str, Vec<&HeaderRecord>> = BTreeMap::new();
        for record in records {
            by_module.entry(record.module.as_str()).or_default().push(record);
        }

        for (module, group) in by_module.iter().filter(|(_, group)| group.len() > 1) {
            for record in group {
                let others: Vec<String> = group
                    .iter()
                    .filter(|other| other.file_path != record.file_path)
                    .map(|other| other.file_path.display().to_string())
                    .collect();
                let mut finding = self.finding(
                    record,
                    format!("module '{module}' is declared by {} files", group.len()),
                );
                if !others.is_empty() {
                    finding =
                        finding.with_help(format!("also declared in: {}", others.join(", ")));
                }
                sink.emit(finding);
            }
        }
    }
}
