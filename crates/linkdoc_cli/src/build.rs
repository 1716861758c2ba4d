//! The `linkdoc build` command: validate, then index.

use linkdoc_cache::HashCache;

use crate::index::{index_cache, settle_index_cache, write_project_index};
use crate::pipeline::{
    commit_cache, files_with_errors, load_records, print_report, resolve_project,
};
use crate::validate::validate_records;
use crate::{BuildArgs, GlobalArgs};

/// Runs the `build` command.
///
/// The index is only written when validation finds no errors; otherwise the
/// command exits with 1 and leaves any existing index untouched.
///
/// An incremental build skips a file only when both the validation cache
/// and the index cache agree it is unchanged.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let validate = &args.validate;
    let output = args.output.as_deref();
    let project = resolve_project(global, &validate.scan)?;
    let cache = index_cache(&project, validate.scan.incremental, output).map(|indexed| {
        let mut cache = HashCache::load(&project.cache_path());
        cache.retain_agreeing(&indexed);
        cache
    });
    let loaded = load_records(&project, cache, global)?;

    let report = validate_records(&project, &loaded.batch.records, validate);
    commit_cache(&project.cache_path(), &loaded, &files_with_errors(&report));
    print_report(&report, validate.format, global);
    if !report.is_valid() {
        if !global.quiet {
            eprintln!("    Skipping index: validation failed");
        }
        return Ok(1);
    }

    write_project_index(&project, &loaded, output, global)?;
    settle_index_cache(&project, &loaded, output);
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReportFormat, ScanArgs, ValidateArgs};
    use linkdoc_index::read_index;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn args(path: &Path) -> BuildArgs {
        BuildArgs {
            validate: ValidateArgs {
                scan: ScanArgs {
                    path: Some(path.display().to_string()),
                    incremental: false,
                },
                format: ReportFormat::Text,
                allow: Vec::new(),
                deny: Vec::new(),
            },
            output: None,
        }
    }

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: 0,
            color: false,
            config: None,
        }
    }

    #[test]
    fn valid_project_gets_index() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "/*\n# Module: a.go\nDoes a.\n*/\n").unwrap();
        assert_eq!(run(&args(tmp.path()), &global()).unwrap(), 0);
        assert!(tmp.path().join("docs/linkdoc_index.json").is_file());
    }

    #[test]
    fn invalid_project_skips_index() {
        let tmp = TempDir::new().unwrap();
        // No description line: a validation error.
        fs::write(tmp.path().join("a.go"), "/*\n# Module: a.go\n*/\n").unwrap();
        assert_eq!(run(&args(tmp.path()), &global()).unwrap(), 1);
        assert!(!tmp.path().join("docs/linkdoc_index.json").exists());
    }

    #[test]
    fn incremental_rerun_still_fails_invalid_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "/*\n# Module: a.go\n*/\n").unwrap();
        let mut args = args(tmp.path());
        args.validate.scan.incremental = true;

        assert_eq!(run(&args, &global()).unwrap(), 1);
        assert_eq!(run(&args, &global()).unwrap(), 1);
        assert!(!tmp.path().join("docs/linkdoc_index.json").exists());
    }

    #[test]
    fn incremental_rerun_keeps_index_complete() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "/*\n# Module: a.go\nDoes a.\n*/\n").unwrap();
        fs::write(tmp.path().join("b.go"), "/*\n# Module: b.go\nDoes b.\n*/\n").unwrap();
        let mut args = args(tmp.path());
        args.validate.scan.incremental = true;
        let index = tmp.path().join("docs/linkdoc_index.json");

        for _ in 0..2 {
            assert_eq!(run(&args, &global()).unwrap(), 0);
            assert_eq!(read_index(&index).unwrap().metadata.module_count, 2);
        }
    }

    #[test]
    fn files_validated_alone_are_still_indexed() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), "/*\n# Module: a.go\nDoes a.\n*/\n").unwrap();
        let mut args = args(tmp.path());
        args.validate.scan.incremental = true;
        assert_eq!(crate::validate::run(&args.validate, &global()).unwrap(), 0);

        assert_eq!(run(&args, &global()).unwrap(), 0);
        let doc = read_index(&tmp.path().join("docs/linkdoc_index.json")).unwrap();
        assert!(doc.modules.contains_key("a.go"));
    }
}
