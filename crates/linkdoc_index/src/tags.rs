//! The tag-to-module lookup.

use std::collections::{BTreeMap, HashSet};

use linkdoc_parser::HeaderRecord;

/// Maps each tag to the modules declaring it, in record order.
///
/// A tag repeated within one header lists that header's module once. Two
/// files declaring the same module each contribute an entry.
pub fn tag_index(records: &[HeaderRecord]) -> BTreeMap<String, Vec<String>> {
    let mut index: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for record in records {
        let mut seen = HashSet::new();
        for tag in record.tags.iter().filter(|tag| seen.insert(tag.as_str())) {
            index
                .entry(tag.clone())
                .or_default()
                .push(record.module.clone());
        }
    }
    index
}
