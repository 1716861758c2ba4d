//! Shared pipeline helpers for CLI commands.
//!
//! Contains the steps every command shares: project root and config
//! resolution, source file discovery, cached batch parsing, and finding
//! output.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use linkdoc_cache::HashCache;
use linkdoc_config::{
    find_project_root, load_config_file, load_config_or_default, ProjectConfig, ScanConfig,
    CONFIG_FILE,
};
use linkdoc_diagnostics::{FindingRenderer, TerminalRenderer};
use linkdoc_parser::{parse_batch, BatchReport};
use linkdoc_validate::ValidationReport;

use crate::{GlobalArgs, ReportFormat, ScanArgs};

/// File name of the index hash cache.
const INDEX_CACHE_FILE: &str = "index_hashes.txt";

/// A resolved project: where it lives, how it is configured, and what to scan.
#[derive(Debug)]
pub struct Project {
    /// Directory that output and cache paths are relative to.
    pub root: PathBuf,
    /// The loaded (or default) configuration.
    pub config: ProjectConfig,
    /// Directory whose files are scanned.
    pub scan_dir: PathBuf,
}

impl Project {
    /// Location of the hash cache for files that last validated without
    /// errors.
    pub fn cache_path(&self) -> PathBuf {
        self.root.join(&self.config.cache.path)
    }

    /// Location of the hash cache for files whose current content the
    /// configured index reflects. Kept next to [`cache_path`](Self::cache_path).
    pub fn index_cache_path(&self) -> PathBuf {
        self.cache_path().with_file_name(INDEX_CACHE_FILE)
    }

    /// Returns `true` if `output` names the configured index location.
    pub fn writes_configured_index(&self, output: Option<&str>) -> bool {
        self.index_path(output) == self.index_path(None)
    }

    /// Location of the index, honoring a command-line override.
    pub fn index_path(&self, output: Option<&str>) -> PathBuf {
        match output {
            Some(output) => absolute(Path::new(output)),
            None => self.root.join(&self.config.index.output),
        }
    }
}

/// Resolves the project for a command.
///
/// If `--config` is given it names the config file (or its directory) and
/// fixes the root. Otherwise the root is the nearest ancestor of the scan
/// path containing `linkdoc.toml`, or the scan path itself when there is
/// none. The scan path defaults to the root, or the current directory.
pub fn resolve_project(
    global: &GlobalArgs,
    scan: &ScanArgs,
) -> Result<Project, Box<dyn std::error::Error>> {
    let scan_path = match &scan.path {
        Some(path) => absolute(Path::new(path)),
        None => std::env::current_dir()?,
    };
    if !scan_path.is_dir() {
        return Err(format!("scan path {} is not a directory", scan_path.display()).into());
    }

    let (root, config) = match &global.config {
        Some(config_path) => {
            let config_path = absolute(Path::new(config_path));
            if config_path.is_file() {
                let root = config_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));
                (root, load_config_file(&config_path)?)
            } else if config_path.is_dir() {
                let config = load_config_or_default(&config_path)?;
                (config_path, config)
            } else {
                return Err(format!("config path {} does not exist", config_path.display()).into());
            }
        }
        None => {
            let root = find_project_root(&scan_path).unwrap_or_else(|| scan_path.clone());
            let config = load_config_or_default(&root)?;
            (root, config)
        }
    };

    let scan_dir = match &scan.path {
        Some(_) => scan_path,
        None if global.config.is_some() => root.clone(),
        None => scan_path,
    };

    if root.join(CONFIG_FILE).is_file() {
        tracing::debug!("using {}", root.join(CONFIG_FILE).display());
    } else {
        tracing::debug!("no {CONFIG_FILE} found, using defaults");
    }

    Ok(Project {
        root,
        config,
        scan_dir,
    })
}

/// Makes `path` absolute against the working directory without touching
/// the file system.
pub fn absolute(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    linkdoc_common::normalize_lexically(&absolute)
}

/// Discovers candidate source files under `dir` (recursive), sorted by path.
pub fn discover_source_files(
    dir: &Path,
    scan: &ScanConfig,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    walk_dir(dir, scan, &mut files)?;
    files.sort();
    Ok(files)
}

/// Recursively walks a directory collecting candidate files.
fn walk_dir(
    dir: &Path,
    scan: &ScanConfig,
    files: &mut Vec<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            if !is_excluded_dir(&path, scan) {
                walk_dir(&path, scan, files)?;
            }
        } else if is_candidate(&path, scan) {
            files.push(path);
        }
    }
    Ok(())
}

fn is_excluded_dir(path: &Path, scan: &ScanConfig) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| scan.exclude_dirs.iter().any(|d| d == name))
}

/// Returns `true` if `path` has a scanned extension and its stem carries no
/// excluded suffix.
pub fn is_candidate(path: &Path, scan: &ScanConfig) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !scan.extensions.iter().any(|e| e == ext) {
        return false;
    }
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    !scan
        .exclude_suffixes
        .iter()
        .any(|suffix| stem.ends_with(suffix.as_str()))
}

/// The files of one run and what parsing made of them.
#[derive(Debug)]
pub struct LoadedFiles {
    /// Every discovered candidate file, sorted.
    pub files: Vec<PathBuf>,
    /// The batch parse outcome.
    pub batch: BatchReport,
    /// Hashes of every file read this run, when a cache was supplied.
    pub hashes: Option<HashCache>,
}

/// Discovers and parses the project's files.
///
/// With a cache, entries for deleted files are pruned first and files whose
/// hash matches are skipped. Nothing is saved here: callers commit the
/// returned hashes with [`commit_cache`] once their own work has succeeded.
pub fn load_records(
    project: &Project,
    cache: Option<HashCache>,
    global: &GlobalArgs,
) -> Result<LoadedFiles, Box<dyn std::error::Error>> {
    let files = discover_source_files(&project.scan_dir, &project.config.scan)?;
    if !global.quiet {
        eprintln!("{}", scan_summary(project, files.len()));
    }

    let cache = cache.map(|mut cache| {
        let pruned = cache.retain_paths(&files);
        if pruned > 0 {
            tracing::debug!("pruned {pruned} deleted file(s) from the hash cache");
        }
        cache
    });

    let (batch, hashes) = parse_batch(&files, cache);
    if !batch.skipped.is_empty() {
        tracing::info!("{} unchanged file(s) skipped", batch.skipped.len());
    }
    Ok(LoadedFiles {
        files,
        batch,
        hashes,
    })
}

/// The progress line printed before parsing.
pub fn scan_summary(project: &Project, file_count: usize) -> String {
    let dir = project.scan_dir.display();
    match project.config.project.name.trim() {
        "" => format!("   Scanning {file_count} file(s) in {dir}"),
        name => format!("   Scanning {name}: {file_count} file(s) in {dir}"),
    }
}

/// Records this run's hashes into the cache file at `path` and saves it.
///
/// Files in `rejected` (and files that failed to read) lose their entry so
/// the next incremental run looks at them again. Entries for skipped files
/// are left as they were. Does nothing when the run had no cache. A cache
/// that cannot be saved is reported but does not fail the command.
pub fn commit_cache(path: &Path, loaded: &LoadedFiles, rejected: &HashSet<PathBuf>) {
    let Some(fresh) = &loaded.hashes else {
        return;
    };
    let mut cache = HashCache::load(path);
    cache.retain_paths(&loaded.files);
    for file in &loaded.batch.parsed {
        match fresh.get(file) {
            Some(hash) if !rejected.contains(file) => cache.record(file, hash),
            _ => {
                cache.remove(file);
            }
        }
    }
    for failure in &loaded.batch.failures {
        cache.remove(&failure.path);
    }
    if let Err(e) = cache.save() {
        tracing::warn!("{e}");
    }
}

/// Deletes the cache file at `path`, if any.
///
/// Used after a full index write, which the cache no longer describes.
pub fn invalidate_cache(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!("removed stale hash cache {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove stale hash cache {}: {e}", path.display()),
    }
}

/// Files that drew at least one error finding.
pub fn files_with_errors(report: &ValidationReport) -> HashSet<PathBuf> {
    report.errors().map(|finding| finding.file_path.clone()).collect()
}

/// Prints a validation report in the requested format.
///
/// Text output always shows errors and shows warnings only when verbose.
/// JSON output always contains every finding.
pub fn print_report(report: &ValidationReport, format: ReportFormat, global: &GlobalArgs) {
    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for finding in &report.findings {
                if finding.is_error() || global.verbose > 0 {
                    eprint!("{}", renderer.render(finding));
                }
            }
            if !global.quiet {
                eprintln!(
                    "   Result: {} error(s), {} warning(s)",
                    report.error_count, report.warning_count
                );
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}
