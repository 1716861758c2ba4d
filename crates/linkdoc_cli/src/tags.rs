//! The `linkdoc tags` command.

use linkdoc_index::tag_index;
use linkdoc_parser::HeaderRecord;

use crate::pipeline::{load_records, resolve_project};
use crate::{GlobalArgs, ScanArgs};

/// Prints the tag-to-modules lookup as pretty JSON on stdout.
///
/// Every file is parsed; the lookup has no previous output to merge with,
/// so `--incremental` has no effect here.
pub fn run(args: &ScanArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = resolve_project(global, args)?;
    let loaded = load_records(&project, None, global)?;
    println!("{}", render_tags(&loaded.batch.records)?);
    Ok(0)
}

/// Renders the tag lookup for `records` as pretty JSON.
pub fn render_tags(records: &[HeaderRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&tag_index(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn args(path: &std::path::Path) -> ScanArgs {
        ScanArgs {
            path: Some(path.display().to_string()),
            incremental: true,
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
    fn tags_run_succeeds_twice() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("a.go"),
            "/*\n# Module: a.go\nDoes a.\n## Tags\nhttp, api\n*/\n",
        )
        .unwrap();
        assert_eq!(run(&args(tmp.path()), &global()).unwrap(), 0);
        assert_eq!(run(&args(tmp.path()), &global()).unwrap(), 0);
    }

    #[test]
    fn rendered_lookup_lists_modules_per_tag() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("a.go"),
            "/*\n# Module: a.go\nDoes a.\n## Tags\nhttp, api, http\n*/\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("b.go"),
            "/*\n# Module: b.go\nDoes b.\n## Tags\napi\n*/\n",
        )
        .unwrap();
        let project = resolve_project(&global(), &args(tmp.path())).unwrap();
        let loaded = load_records(&project, None, &global()).unwrap();

        let json = render_tags(&loaded.batch.records).unwrap();
        let tags: BTreeMap<String, Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(tags["api"], vec!["a.go", "b.go"]);
        assert_eq!(tags["http"], vec!["a.go"]);
        assert_eq!(tags.len(), 2);
    }
}
