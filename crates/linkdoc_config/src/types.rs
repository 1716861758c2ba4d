//! Configuration types deserialized from `linkdoc.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// Default tag vocabulary accepted by the tag-taxonomy check.
///
/// Grouped as functional, domain, and technical tags followed by common extras.
pub const DEFAULT_TAGS: &[&str] = &[
    // Functional
    "http",
    "storage",
    "api-client",
    "business-logic",
    "data-types",
    "middleware",
    "auth",
    "validation",
    // Domain
    "location",
    "errors",
    "tips",
    "commercial",
    "social",
    "cryptogram",
    // Technical
    "dynamodb",
    "cache",
    "rate-limiting",
    "websocket",
    "rdf",
    "solid",
    // Common
    "api",
    "tracking",
    "search",
    "geolocation",
    "parsing",
    "tooling",
    "linkedoc",
];

/// The top-level project configuration parsed from `linkdoc.toml`.
///
/// Every section is optional and falls back to its [`Default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Informational project metadata.
    #[serde(default)]
    pub project: ProjectMeta,
    /// Which files are candidates for header parsing.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Validation limits and rule overrides.
    #[serde(default)]
    pub validate: ValidateConfig,
    /// The known tag vocabulary.
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    /// Index output settings.
    #[serde(default)]
    pub index: IndexConfig,
    /// Incremental cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Informational project metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectMeta {
    /// The project name, shown in run summaries.
    #[serde(default)]
    pub name: String,
}

/// File discovery settings used by the directory walker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions (without the dot) whose files are scanned.
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(deserialize_with = "deserialize_string_or_vec")]
    pub extensions: Vec<String>,
    /// Directory names skipped anywhere in the tree.
    pub exclude_dirs: Vec<String>,
    /// File-stem suffixes marking files to skip (e.g. `_test`).
    pub exclude_suffixes: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: ["go", "rs", "c", "h", "cpp", "java", "js", "ts"]
                .into_iter()
                .map(String::from)
                .collect(),
            exclude_dirs: ["vendor", "target", "node_modules", ".git"]
                .into_iter()
                .map(String::from)
                .collect(),
            exclude_suffixes: vec!["_test".to_string()],
        }
    }
}

/// Validation limits and rule severity overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Descriptions longer than this many characters produce a warning.
    pub max_description_len: usize,
    /// File-name suffixes identifying entry points, which may omit exports.
    pub entry_points: Vec<String>,
    /// Rule names whose findings are promoted to errors.
    pub deny: Vec<String>,
    /// Rule names whose findings are suppressed.
    pub allow: Vec<String>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            max_description_len: 150,
            entry_points: vec!["main.go".to_string(), "main.rs".to_string()],
            deny: Vec::new(),
            allow: Vec::new(),
        }
    }
}

/// The tag vocabulary used by the taxonomy check.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// The base vocabulary. Setting it replaces [`DEFAULT_TAGS`].
    pub tags: Vec<String>,
    /// Additional tags appended to the base vocabulary.
    pub extra: Vec<String>,
}

impl TaxonomyConfig {
    /// Iterates over every known tag (base vocabulary first, then extras).
    pub fn known_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().chain(self.extra.iter()).map(String::as_str)
    }
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
            extra: Vec::new(),
        }
    }
}

/// Index output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Output path of the JSON index, relative to the project root.
    pub output: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            output: "docs/linkdoc_index.json".to_string(),
        }
    }
}

/// Incremental cache settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Path of the hash cache file, relative to the project root.
    pub path: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: ".linkdoc_cache/file_hashes.txt".to_string(),
        }
    }
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows TOML config to accept both `extensions = "go"` (string) and
/// `extensions = ["go", "rs"]` (array of strings).
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn empty_file_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.validate.max_description_len, 150);
        assert_eq!(config.index.output, "docs/linkdoc_index.json");
        assert_eq!(config.cache.path, ".linkdoc_cache/file_hashes.txt");
        assert!(config.scan.extensions.contains(&"go".to_string()));
        assert_eq!(config.taxonomy.tags.len(), DEFAULT_TAGS.len());
    }

    #[test]
    fn extensions_single_string() {
        let config = load_config_from_str("[scan]\nextensions = \"go\"\n").unwrap();
        assert_eq!(config.scan.extensions, vec!["go"]);
        // Untouched fields in the same section keep their defaults
        assert_eq!(config.scan.exclude_suffixes, vec!["_test"]);
    }

    #[test]
    fn extensions_list() {
        let config = load_config_from_str("[scan]\nextensions = [\"go\", \"rs\"]\n").unwrap();
        assert_eq!(config.scan.extensions, vec!["go", "rs"]);
    }

    #[test]
    fn taxonomy_extra_extends_defaults() {
        let config = load_config_from_str("[taxonomy]\nextra = [\"indexing\", \"json\"]\n").unwrap();
        let known: Vec<&str> = config.taxonomy.known_tags().collect();
        assert!(known.contains(&"http"));
        assert!(known.contains(&"indexing"));
        assert!(known.contains(&"json"));
    }

    #[test]
    fn taxonomy_tags_replace_defaults() {
        let config = load_config_from_str("[taxonomy]\ntags = [\"only\"]\n").unwrap();
        let known: Vec<&str> = config.taxonomy.known_tags().collect();
        assert_eq!(known, vec!["only"]);
    }

    #[test]
    fn validate_overrides() {
        let toml = r#"
[validate]
max_description_len = 80
entry_points = ["cmd.go"]
deny = ["duplicate-module"]
allow = ["no-tags"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.validate.max_description_len, 80);
        assert_eq!(config.validate.entry_points, vec!["cmd.go"]);
        assert_eq!(config.validate.deny, vec!["duplicate-module"]);
        assert_eq!(config.validate.allow, vec!["no-tags"]);
    }
}
