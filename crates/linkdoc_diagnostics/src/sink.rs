//! Accumulator for findings emitted while validation rules run.

use crate::finding::Finding;
use std::sync::Mutex;

/// An accumulator for findings emitted during validation.
///
/// Rules receive a shared reference and call [`emit`](Self::emit); the engine
/// drains it with [`take_all`](Self::take_all).
pub struct FindingSink {
    findings: Mutex<Vec<Finding>>,
}

impl FindingSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            findings: Mutex::new(Vec::new()),
        }
    }

    /// Emits a finding into the sink.
    pub fn emit(&self, finding: Finding) {
        let mut findings = self
            .findings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        findings.push(finding);
    }

    /// Takes all accumulated findings, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Finding> {
        let mut findings = self
            .findings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *findings)
    }
}

impl Default for FindingSink {
    fn default() -> Self {
        Self::new()
    }
}
