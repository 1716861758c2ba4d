//! Validation engine that manages rule registration, configuration, and execution.
//!
//! The `Validator` accepts a `ProjectConfig` to control which rules are denied
//! or allowed, then runs each enabled rule over every record followed by the
//! collection-wide checks.

use std::collections::HashSet;

use linkdoc_config::ProjectConfig;
use linkdoc_diagnostics::{FindingSink, Severity};
use linkdoc_parser::HeaderRecord;

use crate::context::ValidationContext;
use crate::report::ValidationReport;
use crate::rules::register_builtin_rules;
use crate::ValidationRule;

/// The engine that orchestrates running validation rules over a collection.
///
/// Rules are registered at construction time. The engine respects
/// `[validate]` in the configuration to suppress rules (allow) or promote
/// their findings to errors (deny).
pub struct Validator {
    /// All registered rules.
    rules: Vec<Box<dyn ValidationRule>>,
    /// Rule names whose findings are promoted to error severity.
    denied: HashSet<String>,
    /// Rule names that are suppressed (not reported).
    allowed: HashSet<String>,
    /// Vocabulary and limits handed to every rule.
    context: ValidationContext,
}

impl Validator {
    /// Creates a validator configured by the given project configuration.
    ///
    /// All builtin rules are registered automatically.
    pub fn new(config: &ProjectConfig) -> Self {
        let mut validator = Self {
            rules: Vec::new(),
            denied: config.validate.deny.iter().cloned().collect(),
            allowed: config.validate.allow.iter().cloned().collect(),
            context: ValidationContext::from_config(config),
        };
        register_builtin_rules(&mut validator);
        validator
    }

    /// Creates a validator with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&ProjectConfig::default())
    }

    /// Replaces the injected context.
    pub fn with_context(mut self, context: ValidationContext) -> Self {
        self.context = context;
        self
    }

    /// Suppresses the named rule.
    pub fn allow(&mut self, rule: impl Into<String>) {
        let rule = rule.into();
        self.denied.remove(&rule);
        self.allowed.insert(rule);
    }

    /// Promotes the named rule's findings to errors.
    pub fn deny(&mut self, rule: impl Into<String>) {
        let rule = rule.into();
        self.allowed.remove(&rule);
        self.denied.insert(rule);
    }

    /// Registers a rule with the engine.
    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the injected context.
    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Validates the whole collection.
    ///
    /// Findings appear record by record in input order (rules in
    /// registration order within a record), followed by collection-wide
    /// findings. Records are never modified.
    pub fn validate(&self, records: &[HeaderRecord]) -> ValidationReport {
        let sink = FindingSink::new();
        for record in records {
            for rule in self.enabled_rules() {
                self.run_rule(rule, &sink, |temp| {
                    rule.check_record(record, &self.context, temp);
                });
            }
        }
        for rule in self.enabled_rules() {
            self.run_rule(rule, &sink, |temp| {
                rule.check_collection(records, &self.context, temp);
            });
        }
        let report = ValidationReport::from_findings(sink.take_all());
        tracing::debug!(
            "validated {} record(s): {} error(s), {} warning(s)",
            records.len(),
            report.error_count,
            report.warning_count
        );
        report
    }

    fn enabled_rules(&self) -> impl Iterator<Item = &dyn ValidationRule> {
        self.rules
            .iter()
            .map(|rule| rule.as_ref())
            .filter(|rule| !self.allowed.contains(rule.name()))
    }

    /// Runs `check` against a temporary sink and transfers its findings,
    /// promoting them to errors if the rule is denied.
    fn run_rule(
        &self,
        rule: &dyn ValidationRule,
        sink: &FindingSink,
        check: impl FnOnce(&FindingSink),
    ) {
        let temp_sink = FindingSink::new();
        check(&temp_sink);
        let is_denied = self.denied.contains(rule.name());
        for mut finding in temp_sink.take_all() {
            if is_denied {
                finding.severity = Severity::Error;
            }
            sink.emit(finding);
        }
    }
}
