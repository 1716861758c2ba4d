//! Classification of individual header lines.
//!
//! The state machine in [`machine`](crate::machine) works on trimmed lines
//! with the comment gutter removed. This module decides what each such line
//! is, independent of the current state.

use crate::record::LinkRef;

/// What a single header line contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Nothing but whitespace.
    Blank,
    /// The `<!-- LinkedDoc RDF -->` start marker.
    RdfStart,
    /// The `<!-- End LinkedDoc RDF -->` end marker.
    RdfEnd,
    /// A `# Module: <name>` declaration carrying the trimmed name.
    ModuleDecl(&'a str),
    /// A line starting with `#`.
    Heading(Heading),
    /// Anything else; interpreted according to the current section.
    Text(&'a str),
}

/// A recognized section heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    /// `## Linked Modules`, possibly followed by more text.
    LinkedModules,
    /// `## Tags`
    Tags,
    /// `## Exports`
    Exports,
    /// Any other `#` line.
    Other,
}

/// Strips a leading `*` comment gutter and re-trims.
pub fn strip_gutter(trimmed: &str) -> &str {
    match trimmed.strip_prefix('*') {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Classifies a trimmed, gutter-stripped header line.
pub fn classify(content: &str) -> LineKind<'_> {
    if content.is_empty() {
        return LineKind::Blank;
    }
    match marker_words(content) {
        Some(words) if words == ["LinkedDoc", "RDF"] => return LineKind::RdfStart,
        Some(words) if words == ["End", "LinkedDoc", "RDF"] => return LineKind::RdfEnd,
        _ => {}
    }
    if let Some(name) = module_decl(content) {
        return LineKind::ModuleDecl(name);
    }
    if content.starts_with('#') {
        return LineKind::Heading(heading(content));
    }
    LineKind::Text(content)
}

/// Returns the whitespace-separated words inside the first `<!-- ... -->` on the line.
fn marker_words(content: &str) -> Option<Vec<&str>> {
    let start = content.find("<!--")?;
    let inner = &content[start + 4..];
    let end = inner.find("-->")?;
    Some(inner[..end].split_whitespace().collect())
}

/// Strips `marker` and requires at least one whitespace character after it.
fn strip_spaced<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(marker)?;
    rest.starts_with(char::is_whitespace).then(|| rest.trim_start())
}

fn module_decl(content: &str) -> Option<&str> {
    let rest = strip_spaced(content, "#")?;
    let name = strip_spaced(rest, "Module:")?.trim();
    (!name.is_empty()).then_some(name)
}

fn heading(content: &str) -> Heading {
    let Some(title) = strip_spaced(content, "##") else {
        return Heading::Other;
    };
    let title = title.trim_end();
    if title.starts_with("Linked Modules") {
        Heading::LinkedModules
    } else if title == "Tags" {
        Heading::Tags
    } else if title == "Exports" {
        Heading::Exports
    } else {
        Heading::Other
    }
}

/// Parses a `- [name](path): relationship` link item.
///
/// The `: relationship` suffix is optional; a missing or blank relationship
/// yields an empty string. Returns `None` for anything that doesn't match,
/// including an empty name or path.
pub fn parse_link_item(content: &str) -> Option<LinkRef> {
    let rest = strip_spaced(content, "-")?;
    let rest = rest.strip_prefix('[')?;
    let (name, rest) = rest.split_once(']')?;
    let rest = rest.strip_prefix('(')?;
    let (path, rest) = rest.split_once(')')?;
    let (name, path) = (name.trim(), path.trim());
    if name.is_empty() || path.is_empty() {
        return None;
    }
    let relationship = match rest.trim() {
        "" => "",
        tail => tail.strip_prefix(':')?.trim(),
    };
    Some(LinkRef::new(name, path, relationship))
}

/// Splits a comma-separated tag or export line, dropping empty tokens.
pub fn split_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
}
