//! Inputs a validation run needs beyond the records themselves.

use std::collections::HashSet;

use linkdoc_config::ProjectConfig;

/// The tag vocabulary and limits injected into every rule.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Tags accepted by the taxonomy check.
    pub known_tags: HashSet<String>,
    /// Descriptions longer than this many characters draw a warning.
    pub max_description_len: usize,
    /// File-name suffixes of entry points, which may omit exports.
    pub entry_points: Vec<String>,
}

impl ValidationContext {
    /// Builds a context from the project configuration.
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            known_tags: config.taxonomy.known_tags().map(String::from).collect(),
            max_description_len: config.validate.max_description_len,
            entry_points: config.validate.entry_points.clone(),
        }
    }

    /// Returns `true` if `tag` is in the vocabulary.
    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.known_tags.contains(tag)
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::from_config(&ProjectConfig::default())
    }
}
