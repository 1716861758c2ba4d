//! The index document and its JSON shape.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Format of every timestamp in the document: UTC to the second.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The aggregated index over a collection of header records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    /// Repository-wide statistics.
    #[serde(rename = "_metadata")]
    pub metadata: IndexMetadata,
    /// Per-module entries keyed by module name, sorted.
    pub modules: BTreeMap<String, ModuleEntry>,
}

/// Repository-wide statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// When the document was built.
    #[serde(with = "timestamp")]
    pub generated_at: DateTime<Utc>,
    /// Number of records indexed.
    pub module_count: usize,
    /// Sum of line counts over all records.
    pub total_loc: usize,
    /// `total_loc / module_count`, or 0 when there are no records.
    pub avg_loc: usize,
    /// Records carrying an embedded metadata block.
    pub modules_with_rdf: usize,
}

/// The public projection of one header record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    /// The header's description line.
    pub description: String,
    /// Repository-relative path with `/` separators.
    pub file_path: String,
    /// Declared links in declaration order.
    pub links_to: Vec<LinkEntry>,
    /// Declared exports in declaration order.
    pub exports: Vec<String>,
    /// Declared tags in declaration order.
    pub tags: Vec<String>,
    /// Line count of the whole file.
    pub lines_of_code: usize,
    /// File modification time.
    #[serde(with = "timestamp")]
    pub last_modified: DateTime<Utc>,
    /// Whether the header carries an embedded metadata block.
    pub has_rdf: bool,
}

/// A link as it appears in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Display name of the target.
    pub name: String,
    /// Path exactly as declared.
    pub path: String,
    /// Relationship text, possibly empty.
    pub relationship: String,
}

mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&text)
            .map(|time| time.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> ModuleEntry {
        ModuleEntry {
            description: "Location tracking HTTP handlers.".to_string(),
            file_path: "handlers/location.go".to_string(),
            links_to: vec![LinkEntry {
                name: "types".to_string(),
                path: "../types/location.go".to_string(),
                relationship: "Location data structures".to_string(),
            }],
            exports: vec!["HandleLocation".to_string()],
            tags: vec!["http".to_string(), "location".to_string()],
            lines_of_code: 120,
            last_modified: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
            has_rdf: true,
        }
    }

    #[test]
    fn json_shape_matches_published_format() {
        let mut modules = BTreeMap::new();
        modules.insert("handlers/location.go".to_string(), sample_entry());
        let doc = IndexDocument {
            metadata: IndexMetadata {
                generated_at: Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap(),
                module_count: 1,
                total_loc: 120,
                avg_loc: 120,
                modules_with_rdf: 1,
            },
            modules,
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_metadata"]["generated_at"], "2025-03-15T00:00:00Z");
        assert_eq!(json["_metadata"]["module_count"], 1);
        let entry = &json["modules"]["handlers/location.go"];
        assert_eq!(entry["last_modified"], "2025-03-14T09:26:53Z");
        assert_eq!(entry["links_to"][0]["relationship"], "Location data structures");
        assert_eq!(entry["has_rdf"], true);
        assert!(entry.get("rdf_block").is_none());
    }

    #[test]
    fn timestamp_roundtrip() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: ModuleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let mut json = serde_json::to_value(sample_entry()).unwrap();
        json["last_modified"] = "yesterday".into();
        assert!(serde_json::from_value::<ModuleEntry>(json).is_err());
    }
}
