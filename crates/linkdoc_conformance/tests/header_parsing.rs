//! Conformance tests for header extraction over on-disk files.

use linkdoc_conformance::{run_pipeline, Fixture, HeaderText};
use linkdoc_parser::{parse_batch, parse_file};

#[test]
fn file_without_module_line_has_no_header() {
    let fx = Fixture::new();
    let path = fx.write(
        "notes.go",
        "/*\nJust a comment.\n\n## Tags\nhttp\n\n## Exports\nThing\n*/\npackage notes\n",
    );
    assert!(parse_file(&path).unwrap().is_none());

    let result = run_pipeline(&fx);
    assert!(result.records().is_empty());
    assert_eq!(result.batch.headerless, vec![path]);
}

#[test]
fn module_line_outside_comment_is_ignored() {
    let fx = Fixture::new();
    let path = fx.write("a.go", "// # Module: a.go\npackage a\n");
    assert!(parse_file(&path).unwrap().is_none());
}

#[test]
fn full_header_fields() {
    let fx = Fixture::new();
    let text = HeaderText::new("handlers/location.go")
        .description("HTTP handlers for location lookups.")
        .link("storage", "../storage/dynamo.go", "persists locations")
        .tags(&["http", "location", "api"])
        .exports(&["GetLocation", "PutLocation"])
        .rdf()
        .body("package handlers\n");
    let path = fx.write("handlers/location.go", &text.render());

    let record = parse_file(&path).unwrap().unwrap();
    assert_eq!(record.module, "handlers/location.go");
    assert_eq!(record.description, "HTTP handlers for location lookups.");
    assert_eq!(record.linked_modules.len(), 1);
    assert_eq!(record.linked_modules[0].name, "storage");
    assert_eq!(record.linked_modules[0].path, "../storage/dynamo.go");
    assert_eq!(record.linked_modules[0].relationship, "persists locations");
    assert_eq!(record.tags, vec!["http", "location", "api"]);
    assert_eq!(record.exports, vec!["GetLocation", "PutLocation"]);
    assert!(record.has_rdf());
    assert!(record.rdf_block.as_deref().unwrap().contains("code:name"));
    assert_eq!(record.file_path, path);
    assert_eq!(record.line_count, text.render().lines().count());
}

#[test]
fn tag_list_is_trimmed() {
    let fx = Fixture::new();
    let path = fx.write(
        "a.go",
        "/*\n# Module: a.go\nDoes a.\n## Tags\nhttp, location,  api\n*/\n",
    );
    let record = parse_file(&path).unwrap().unwrap();
    assert_eq!(record.tags, vec!["http", "location", "api"]);
}

#[test]
fn duplicate_tags_are_kept() {
    let fx = Fixture::new();
    let path = fx.write(
        "a.go",
        &HeaderText::new("a.go").description("Does a.").tags(&["http", "http"]).render(),
    );
    let record = parse_file(&path).unwrap().unwrap();
    assert_eq!(record.tags, vec!["http", "http"]);
}

#[test]
fn malformed_link_line_is_dropped() {
    let fx = Fixture::new();
    let text = HeaderText::new("a.go")
        .description("Does a.")
        .link("b", "./b.go", "uses b")
        .raw_link_line("- broken line")
        .link("c", "./c.go", "uses c");
    let path = fx.write("a.go", &text.render());

    let record = parse_file(&path).unwrap().unwrap();
    let names: Vec<&str> = record.linked_modules.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn javadoc_style_gutter() {
    let fx = Fixture::new();
    let path = fx.write(
        "Gutter.java",
        "/**\n * # Module: Gutter.java\n *\n * Uses a star gutter.\n *\n * ## Tags\n * tooling\n */\nclass Gutter {}\n",
    );
    let record = parse_file(&path).unwrap().unwrap();
    assert_eq!(record.module, "Gutter.java");
    assert_eq!(record.description, "Uses a star gutter.");
    assert_eq!(record.tags, vec!["tooling"]);
}

#[test]
fn only_first_header_counts() {
    let fx = Fixture::new();
    let text = format!(
        "{}\n{}",
        HeaderText::new("first.go").description("First.").render(),
        HeaderText::new("second.go").description("Second.").render()
    );
    let path = fx.write("a.go", &text);
    assert_eq!(parse_file(&path).unwrap().unwrap().module, "first.go");
}

#[test]
fn unreadable_file_does_not_abort_batch() {
    let fx = Fixture::new();
    let good = fx.write("a.go", &HeaderText::new("a.go").description("Does a.").render());
    let missing = fx.path("missing.go");

    let (report, _) = parse_batch(&[missing.clone(), good], None);
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].path, missing);
}

#[test]
fn invalid_utf8_still_parses() {
    let fx = Fixture::new();
    let path = fx.path("a.go");
    let mut bytes = b"/*\n# Module: a.go\nDoes a.\n*/\n".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    std::fs::write(&path, bytes).unwrap();
    let record = parse_file(&path).unwrap().unwrap();
    assert_eq!(record.module, "a.go");
    assert_eq!(record.line_count, 5);
}
