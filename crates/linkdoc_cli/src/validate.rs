//! The `linkdoc validate` command.

use linkdoc_cache::HashCache;
use linkdoc_parser::HeaderRecord;
use linkdoc_validate::{ValidationReport, Validator};

use crate::pipeline::{
    commit_cache, files_with_errors, load_records, print_report, resolve_project, Project,
};
use crate::{GlobalArgs, ValidateArgs};

/// Runs the `validate` command.
///
/// Returns exit code 0 when no errors were found, 1 otherwise. Incremental
/// runs only remember files that validated without errors, so a failing
/// file keeps failing until it is fixed.
pub fn run(args: &ValidateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = resolve_project(global, &args.scan)?;
    let cache = args
        .scan
        .incremental
        .then(|| HashCache::load(&project.cache_path()));
    let loaded = load_records(&project, cache, global)?;

    let report = validate_records(&project, &loaded.batch.records, args);
    commit_cache(&project.cache_path(), &loaded, &files_with_errors(&report));
    print_report(&report, args.format, global);

    Ok(if report.is_valid() { 0 } else { 1 })
}

/// Validates `records` with the project's rules and the command-line
/// allow/deny overrides applied on top.
pub fn validate_records(
    project: &Project,
    records: &[HeaderRecord],
    args: &ValidateArgs,
) -> ValidationReport {
    let mut validator = Validator::new(&project.config);
    for rule in &args.allow {
        validator.allow(rule.as_str());
    }
    for rule in &args.deny {
        validator.deny(rule.as_str());
    }
    validator.validate(records)
}
