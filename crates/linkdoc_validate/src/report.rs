//! The aggregated outcome of a validation run.

use linkdoc_diagnostics::Finding;
use serde::Serialize;

/// All findings from one run, with severity tallies.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Findings in emission order.
    pub findings: Vec<Finding>,
    /// Number of error findings.
    pub error_count: usize,
    /// Number of warning findings.
    pub warning_count: usize,
}

impl ValidationReport {
    /// Builds a report, tallying severities.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let error_count = findings.iter().filter(|f| f.is_error()).count();
        let warning_count = findings.len() - error_count;
        Self {
            findings,
            error_count,
            warning_count,
        }
    }

    /// Returns `true` if there are no error findings. Warnings never invalidate.
    pub fn is_valid(&self) -> bool {
        self.error_count == 0
    }

    /// Iterates over error findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_error())
    }

    /// Iterates over warning findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.is_error())
    }
}
