//! Structured validation findings with severity, codes, and help text.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single problem detected in one file's header.
///
/// Each finding includes:
/// - the file it applies to
/// - a severity level and stable code
/// - the name of the rule that produced it
/// - a message and optional actionable help
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The file whose header triggered this finding.
    pub file_path: PathBuf,
    /// The severity level of this finding.
    pub severity: Severity,
    /// The code identifying the kind of finding.
    pub code: DiagnosticCode,
    /// The kebab-case name of the rule that emitted it.
    pub rule: String,
    /// The main finding message.
    pub message: String,
    /// Actionable suggestions (e.g., "help: ...").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<String>,
}

impl Finding {
    /// Creates a new error finding.
    pub fn error(
        code: DiagnosticCode,
        rule: impl Into<String>,
        file_path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, code, rule, file_path, message)
    }

    /// Creates a new warning finding.
    pub fn warning(
        code: DiagnosticCode,
        rule: impl Into<String>,
        file_path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, code, rule, file_path, message)
    }

    /// Creates a finding with an explicit severity.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        rule: impl Into<String>,
        file_path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            severity,
            code,
            rule: rule.into(),
            message: message.into(),
            help: Vec::new(),
        }
    }

    /// Adds a help message to this finding.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Returns `true` if this finding is an error.
    pub fn is_error(&self) -> bool {
        self.severity.is_error()
    }
}
