//! W109 (dependency cycle): links between headers form a cycle.

use std::collections::HashMap;
use std::path::PathBuf;

use linkdoc_diagnostics::{Category, DiagnosticCode, FindingSink, Severity};
use linkdoc_parser::HeaderRecord;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::helpers::{absolute_normalized, resolve_link};
use crate::{ValidationContext, ValidationRule};

/// Detects cycles in the link graph.
///
/// Each record is a node; a link is an edge when its resolved path is the
/// file of another record in the collection. Links to files without a
/// header are ignored. Every strongly connected component with more than
/// one node, or a node linking to itself, is one cycle, reported once on
/// its first member in input order.
pub struct DependencyCycle;

impl ValidationRule for DependencyCycle {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 109)
    }

    fn name(&self) -> &str {
        "dependency-cycle"
    }

    fn description(&self) -> &str {
        "linked modules form a dependency cycle"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_collection(
        &self,
        records: &[HeaderRecord],
        _ctx: &ValidationContext,
        sink: &FindingSink,
    ) {
        let graph = link_graph(records);

        for component in tarjan_scc(&graph) {
            let is_cycle = match component.as_slice() {
                [single] => graph.contains_edge(*single, *single),
                members => members.len() > 1,
            };
            if !is_cycle {
                continue;
            }

            let mut indices: Vec<usize> = component.iter().map(|node| graph[*node]).collect();
            indices.sort_unstable();
            let mut modules: Vec<&str> =
                indices.iter().map(|i| records[*i].module.as_str()).collect();
            modules.sort_unstable();
            modules.dedup();

            sink.emit(self.finding(
                &records[indices[0]],
                format!("dependency cycle between modules: {}", modules.join(", ")),
            ));
        }
    }
}

/// Builds the directed link graph. Node weights are indices into `records`.
fn link_graph(records: &[HeaderRecord]) -> DiGraph<usize, ()> {
    let mut graph = DiGraph::new();
    let mut by_path: HashMap<PathBuf, NodeIndex> = HashMap::new();
    let nodes: Vec<NodeIndex> = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let node = graph.add_node(i);
            by_path
                .entry(absolute_normalized(&record.file_path))
                .or_insert(node);
            node
        })
        .collect();

    for (record, &from) in records.iter().zip(&nodes) {
        for link in &record.linked_modules {
            if let Some(&to) = by_path.get(&resolve_link(record, link)) {
                graph.update_edge(from, to, ());
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::check_all;
    use linkdoc_parser::LinkRef;

    fn linked(module: &str, path: &str, links: &[&str]) -> HeaderRecord {
        let mut record = HeaderRecord::new(module, path);
        for target in links {
            record.linked_modules.push(LinkRef::new(*target, *target, "uses"));
        }
        record
    }

    #[test]
    fn two_node_cycle_reported_once() {
        let records = vec![
            linked("a", "/repo/a.go", &["./b.go"]),
            linked("b", "/repo/b.go", &["./a.go"]),
        ];
        let diags = check_all(&DependencyCycle, &records);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].file_path, std::path::Path::new("/repo/a.go"));
        assert!(diags[0].message.contains("a, b"));
    }

    #[test]
    fn chain_is_not_a_cycle() {
        let records = vec![
            linked("a", "/repo/a.go", &["./b.go"]),
            linked("b", "/repo/b.go", &["./c.go"]),
            linked("c", "/repo/c.go", &[]),
        ];
        assert!(check_all(&DependencyCycle, &records).is_empty());
    }

    #[test]
    fn self_link_is_a_cycle() {
        let records = vec![linked("a", "/repo/a.go", &["./a.go"])];
        assert_eq!(check_all(&DependencyCycle, &records).len(), 1);
    }

    #[test]
    fn separate_cycles_reported_separately() {
        let records = vec![
            linked("a", "/repo/a.go", &["./b.go"]),
            linked("b", "/repo/b.go", &["./a.go"]),
            linked("c", "/repo/sub/c.go", &["./d.go"]),
            linked("d", "/repo/sub/d.go", &["../sub/c.go"]),
        ];
        assert_eq!(check_all(&DependencyCycle, &records).len(), 2);
    }

    #[test]
    fn links_to_unheadered_files_are_ignored() {
        let records = vec![linked("a", "/repo/a.go", &["./plain.go"])];
        assert!(check_all(&DependencyCycle, &records).is_empty());
    }
}
