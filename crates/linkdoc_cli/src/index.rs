//! The `linkdoc index` command.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use linkdoc_cache::HashCache;
use linkdoc_index::{read_index, write_index, IndexBuilder, IndexDocument};
use linkdoc_parser::parse_batch;

use crate::pipeline::{
    commit_cache, invalidate_cache, load_records, resolve_project, LoadedFiles, Project,
};
use crate::{GlobalArgs, IndexArgs};

/// Runs the `index` command.
///
/// A project without headers still gets a zero document. Failing to write
/// the index is the only error this command returns.
pub fn run(args: &IndexArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = resolve_project(global, &args.scan)?;
    let output = args.output.as_deref();
    let cache = index_cache(&project, args.scan.incremental, output);
    let loaded = load_records(&project, cache, global)?;
    write_project_index(&project, &loaded, output, global)?;
    settle_index_cache(&project, &loaded, output);
    Ok(0)
}

/// The index hash cache for an incremental run.
///
/// Only the configured index has a cache; an overridden output is always
/// built from every file.
pub fn index_cache(project: &Project, incremental: bool, output: Option<&str>) -> Option<HashCache> {
    (incremental && project.writes_configured_index(output))
        .then(|| HashCache::load(&project.index_cache_path()))
}

/// Brings the index hash cache in line with an index just written to
/// `output`.
///
/// An incremental write records this run's hashes. A full write of the
/// configured index removes the cache, which no longer describes it.
pub fn settle_index_cache(project: &Project, loaded: &LoadedFiles, output: Option<&str>) {
    if !project.writes_configured_index(output) {
        return;
    }
    if loaded.hashes.is_some() {
        commit_cache(&project.index_cache_path(), loaded, &HashSet::new());
    } else {
        invalidate_cache(&project.index_cache_path());
    }
}

/// Builds the index for the loaded files and writes it, returning where it
/// went.
pub fn write_project_index(
    project: &Project,
    loaded: &LoadedFiles,
    output: Option<&str>,
    global: &GlobalArgs,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = project.index_path(output);
    let doc = project_index(project, loaded, &path);
    write_index(&doc, &path)?;

    if !global.quiet {
        eprintln!(
            "    Indexed {} module(s), {} total lines, {} with RDF -> {}",
            doc.metadata.module_count,
            doc.metadata.total_loc,
            doc.metadata.modules_with_rdf,
            path.display()
        );
    }
    Ok(path)
}

/// The document for the loaded files.
///
/// When unchanged files were skipped their entries come from the index
/// already at `path`. If that index is missing or unusable every file is
/// parsed again.
fn project_index(project: &Project, loaded: &LoadedFiles, path: &Path) -> IndexDocument {
    let builder = IndexBuilder::new(&project.root);
    let skipped = &loaded.batch.skipped;
    if skipped.is_empty() {
        return builder.build(&loaded.batch.records);
    }

    let merged = match read_index(path) {
        Ok(previous) => builder.update(previous, &loaded.batch.records, skipped),
        Err(e) => {
            tracing::debug!("{e}");
            None
        }
    };
    merged.unwrap_or_else(|| {
        tracing::info!("previous index unusable, indexing every file");
        let (batch, _) = parse_batch(&loaded.files, None);
        builder.build(&batch.records)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScanArgs;
    use std::fs;
    use tempfile::TempDir;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: 0,
            color: false,
            config: None,
        }
    }

    fn args(path: &std::path::Path, output: Option<String>) -> IndexArgs {
        IndexArgs {
            scan: ScanArgs {
                path: Some(path.display().to_string()),
                incremental: false,
            },
            output,
        }
    }

    #[test]
    fn writes_default_output() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("handlers")).unwrap();
        fs::write(
            tmp.path().join("handlers/location.go"),
            "/*\n# Module: handlers/location.go\nLocation handlers.\n*/\npackage handlers\n",
        )
        .unwrap();

        assert_eq!(run(&args(tmp.path(), None), &global()).unwrap(), 0);

        let doc = read_index(&tmp.path().join("docs/linkdoc_index.json")).unwrap();
        assert_eq!(doc.metadata.module_count, 1);
        let entry = &doc.modules["handlers/location.go"];
        assert_eq!(entry.file_path, "handlers/location.go");
        assert_eq!(entry.lines_of_code, 5);
    }

    #[test]
    fn empty_project_writes_zero_document() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out/index.json");
        let args = args(tmp.path(), Some(out.display().to_string()));
        assert_eq!(run(&args, &global()).unwrap(), 0);

        let doc = read_index(&out).unwrap();
        assert_eq!(doc.metadata.module_count, 0);
        assert_eq!(doc.metadata.avg_loc, 0);
        assert!(doc.modules.is_empty());
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let out = blocker.join("index.json");
        let args = args(tmp.path(), Some(out.display().to_string()));
        assert!(run(&args, &global()).is_err());
    }

    fn incremental(path: &std::path::Path) -> IndexArgs {
        let mut args = args(path, None);
        args.scan.incremental = true;
        args
    }

    fn headed(name: &str, description: &str) -> String {
        format!("/*\n# Module: {name}\n{description}\n*/\npackage x\n")
    }

    #[test]
    fn unchanged_rerun_keeps_every_module() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a.")).unwrap();
        fs::write(tmp.path().join("b.go"), headed("b.go", "Does b.")).unwrap();
        let index = tmp.path().join("docs/linkdoc_index.json");

        for _ in 0..2 {
            assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);
            let doc = read_index(&index).unwrap();
            assert_eq!(doc.metadata.module_count, 2);
            assert!(doc.modules.contains_key("a.go"));
            assert!(doc.modules.contains_key("b.go"));
        }
    }

    #[test]
    fn edited_and_deleted_files_update_their_entries() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a.")).unwrap();
        fs::write(tmp.path().join("b.go"), headed("b.go", "Does b.")).unwrap();
        fs::write(tmp.path().join("c.go"), headed("c.go", "Does c.")).unwrap();
        assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);

        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a differently.")).unwrap();
        fs::remove_file(tmp.path().join("c.go")).unwrap();
        assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);

        let doc = read_index(&tmp.path().join("docs/linkdoc_index.json")).unwrap();
        assert_eq!(doc.metadata.module_count, 2);
        assert_eq!(doc.modules["a.go"].description, "Does a differently.");
        assert_eq!(doc.modules["b.go"].description, "Does b.");
        assert!(!doc.modules.contains_key("c.go"));
    }

    #[test]
    fn missing_index_is_rebuilt_from_every_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a.")).unwrap();
        fs::write(tmp.path().join("b.go"), headed("b.go", "Does b.")).unwrap();
        let index = tmp.path().join("docs/linkdoc_index.json");
        assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);

        fs::remove_file(&index).unwrap();
        assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);
        assert_eq!(read_index(&index).unwrap().metadata.module_count, 2);
    }

    #[test]
    fn full_write_drops_the_index_cache() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a.")).unwrap();
        let cache = tmp.path().join(".linkdoc_cache/index_hashes.txt");

        assert_eq!(run(&incremental(tmp.path()), &global()).unwrap(), 0);
        assert!(cache.is_file());
        assert_eq!(run(&args(tmp.path(), None), &global()).unwrap(), 0);
        assert!(!cache.exists());
    }

    #[test]
    fn overridden_output_bypasses_the_cache() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.go"), headed("a.go", "Does a.")).unwrap();
        let out = tmp.path().join("elsewhere.json");
        let mut args = incremental(tmp.path());
        args.output = Some(out.display().to_string());

        for _ in 0..2 {
            assert_eq!(run(&args, &global()).unwrap(), 0);
            assert_eq!(read_index(&out).unwrap().metadata.module_count, 1);
        }
        assert!(!tmp.path().join(".linkdoc_cache").exists());
    }
}
