//! Conformance test helpers for LinkedDoc tooling.
//!
//! Provides on-disk fixture trees, a header text builder, and a pipeline
//! function that runs discovery, parsing, validation, and indexing the way
//! the `linkdoc` binary does, returning structured results for assertion in
//! integration tests.

#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use linkdoc_cache::HashCache;
use linkdoc_config::ProjectConfig;
use linkdoc_diagnostics::Finding;
use linkdoc_index::{IndexBuilder, IndexDocument};
use linkdoc_parser::{parse_batch, BatchReport, HeaderRecord};
use linkdoc_validate::{ValidationReport, Validator};
use tempfile::TempDir;

/// A temporary project directory populated with source files.
///
/// The directory is removed when the fixture is dropped.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// The fixture's root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the absolute path of `rel` inside the fixture.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Writes `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// All regular files under the root with the given extension, sorted.
    pub fn files(&self, ext: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();
        collect_files(self.root(), ext, &mut files);
        files.sort();
        files
    }

    /// Where the fixture keeps its hash cache.
    pub fn cache_path(&self) -> PathBuf {
        self.path(".linkdoc_cache/file_hashes.txt")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(dir: &Path, ext: &str, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, ext, out);
        } else if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            out.push(path);
        }
    }
}

/// Builds the text of a LinkedDoc header block comment.
///
/// Sections are emitted in the conventional order: module, description,
/// linked modules, tags, exports, RDF. Sections left empty are omitted.
#[derive(Clone, Debug, Default)]
pub struct HeaderText {
    module: String,
    description: Option<String>,
    links: Vec<String>,
    tags: Vec<String>,
    exports: Vec<String>,
    rdf: Option<String>,
    body: String,
}

impl HeaderText {
    /// Starts a header for `module`.
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            ..Self::default()
        }
    }

    /// Sets the description line.
    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    /// Adds a well-formed link line.
    pub fn link(mut self, name: &str, path: &str, relationship: &str) -> Self {
        self.links.push(format!("- [{name}]({path}): {relationship}"));
        self
    }

    /// Adds a raw line to the linked modules section.
    pub fn raw_link_line(mut self, line: &str) -> Self {
        self.links.push(line.to_string());
        self
    }

    /// Adds tags.
    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    /// Adds exports.
    pub fn exports(mut self, exports: &[&str]) -> Self {
        self.exports.extend(exports.iter().map(|e| e.to_string()));
        self
    }

    /// Adds an RDF block with the three required markers.
    pub fn rdf(self) -> Self {
        let rdf = format!(
            "@prefix code: <https://example.org/code#> .\n\
             <this> a code:Module ;\n    \
             code:name \"{}\" ;\n    \
             code:description \"{}\" .",
            self.module,
            self.description.clone().unwrap_or_default()
        );
        self.raw_rdf(&rdf)
    }

    /// Sets the RDF block content verbatim.
    pub fn raw_rdf(mut self, rdf: &str) -> Self {
        self.rdf = Some(rdf.to_string());
        self
    }

    /// Appends code after the header comment.
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Renders the file text.
    pub fn render(&self) -> String {
        let mut out = String::from("/*\n");
        out.push_str(&format!("# Module: {}\n\n", self.module));
        if let Some(description) = &self.description {
            out.push_str(&format!("{description}\n\n"));
        }
        if !self.links.is_empty() {
            out.push_str("## Linked Modules\n");
            for line in &self.links {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        if !self.tags.is_empty() {
            out.push_str(&format!("## Tags\n{}\n\n", self.tags.join(", ")));
        }
        if !self.exports.is_empty() {
            out.push_str(&format!("## Exports\n{}\n\n", self.exports.join(", ")));
        }
        if let Some(rdf) = &self.rdf {
            out.push_str("<!-- LinkedDoc RDF -->\n");
            out.push_str(rdf);
            out.push_str("\n<!-- End LinkedDoc RDF -->\n");
        }
        out.push_str("*/\n");
        out.push_str(&self.body);
        out
    }
}

/// Result of running parse, validate, and index over a fixture.
pub struct PipelineResult {
    /// What the batch parse saw.
    pub batch: BatchReport,
    /// Validation outcome for the parsed records.
    pub report: ValidationReport,
    /// The index built from the parsed records.
    pub index: IndexDocument,
}

impl PipelineResult {
    /// The parsed records.
    pub fn records(&self) -> &[HeaderRecord] {
        &self.batch.records
    }

    /// All error findings.
    pub fn errors(&self) -> Vec<&Finding> {
        self.report.errors().collect()
    }

    /// All warning findings.
    pub fn warnings(&self) -> Vec<&Finding> {
        self.report.warnings().collect()
    }
}

/// Runs the pipeline over every `.go` file in the fixture with default
/// configuration and no cache.
pub fn run_pipeline(fixture: &Fixture) -> PipelineResult {
    run_pipeline_with_config(fixture, &ProjectConfig::default())
}

/// Runs the pipeline with a custom configuration and no cache.
pub fn run_pipeline_with_config(fixture: &Fixture, config: &ProjectConfig) -> PipelineResult {
    let (batch, _) = parse_batch(&fixture.files("go"), None);
    finish_pipeline(fixture, config, batch)
}

/// Runs the pipeline using (and saving) the fixture's hash cache.
pub fn run_incremental(fixture: &Fixture) -> PipelineResult {
    let files = fixture.files("go");
    let mut cache = HashCache::load(&fixture.cache_path());
    cache.retain_paths(&files);
    let (batch, cache) = parse_batch(&files, Some(cache));
    if let Some(cache) = cache {
        cache.save().unwrap();
    }
    finish_pipeline(fixture, &ProjectConfig::default(), batch)
}

fn finish_pipeline(
    fixture: &Fixture,
    config: &ProjectConfig,
    batch: BatchReport,
) -> PipelineResult {
    let report = Validator::new(config).validate(&batch.records);
    let index = IndexBuilder::new(fixture.root()).build(&batch.records);
    PipelineResult {
        batch,
        report,
        index,
    }
}

/// Parses a config from TOML text.
pub fn make_config(toml_text: &str) -> ProjectConfig {
    linkdoc_config::load_config_from_str(toml_text).unwrap()
}
