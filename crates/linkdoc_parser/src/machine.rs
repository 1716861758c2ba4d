//! The line-driven state machine that extracts a header from a file.
//!
//! The machine has two orthogonal pieces of state: where it is relative to
//! the header comment ([`State`]) and which section heading it last saw
//! ([`Section`]). Each line is fed once, in order, via
//! [`HeaderMachine::feed`]; no backtracking is ever needed.

use crate::line::{classify, parse_link_item, split_list, strip_gutter, Heading, LineKind};
use crate::record::LinkRef;

/// Position of the machine relative to the header comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Before the first block comment.
    Outside,
    /// Inside the header comment.
    InHeader,
    /// Inside the embedded metadata block; lines are captured verbatim.
    InRdf,
    /// The header comment has closed; remaining lines are ignored.
    Done,
}

/// The section heading most recently seen inside the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// No section: text lines are description candidates.
    None,
    /// Under `## Linked Modules`: text lines are link items.
    Links,
    /// Under `## Tags`: the next text line is the tag list.
    Tags,
    /// Under `## Exports`: the next text line is the export list.
    Exports,
}

/// Header fields accumulated by the machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderFields {
    /// The first module declaration seen.
    pub module: String,
    /// The first description line, or empty.
    pub description: String,
    /// Link items in declaration order.
    pub linked_modules: Vec<LinkRef>,
    /// Tags in declaration order.
    pub tags: Vec<String>,
    /// Exports in declaration order.
    pub exports: Vec<String>,
    /// The raw metadata block joined with `\n`, if non-empty.
    pub rdf_block: Option<String>,
}

/// Extracts header fields from a file fed one line at a time.
#[derive(Debug)]
pub struct HeaderMachine {
    state: State,
    section: Section,
    module: Option<String>,
    description: Option<String>,
    linked_modules: Vec<LinkRef>,
    tags: Vec<String>,
    exports: Vec<String>,
    rdf_lines: Vec<String>,
}

impl Default for HeaderMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderMachine {
    /// Creates a machine positioned before the header.
    pub fn new() -> Self {
        Self {
            state: State::Outside,
            section: Section::None,
            module: None,
            description: None,
            linked_modules: Vec::new(),
            tags: Vec::new(),
            exports: Vec::new(),
            rdf_lines: Vec::new(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the current section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns `true` once the header comment has closed.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Advances the machine by one raw line (without its terminator).
    pub fn feed(&mut self, raw: &str) {
        match self.state {
            State::Outside => self.feed_outside(raw),
            State::InHeader => self.feed_header(raw),
            State::InRdf => self.feed_rdf(raw),
            State::Done => {}
        }
    }

    /// Consumes the machine, returning the fields if a module was declared.
    pub fn finish(self) -> Option<HeaderFields> {
        let module = self.module?;
        let rdf_block = (!self.rdf_lines.is_empty()).then(|| self.rdf_lines.join("\n"));
        Some(HeaderFields {
            module,
            description: self.description.unwrap_or_default(),
            linked_modules: self.linked_modules,
            tags: self.tags,
            exports: self.exports,
            rdf_block,
        })
    }

    fn feed_outside(&mut self, raw: &str) {
        let Some(rest) = raw.trim().strip_prefix("/*") else {
            return;
        };
        // A comment that opens and closes on one line is not a header.
        if !rest.trim_end().ends_with("*/") {
            self.state = State::InHeader;
        }
    }

    fn feed_header(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.ends_with("*/") {
            self.state = State::Done;
            return;
        }
        if trimmed.starts_with("/*") {
            return;
        }
        match classify(strip_gutter(trimmed)) {
            LineKind::Blank | LineKind::RdfEnd => {}
            LineKind::RdfStart => self.state = State::InRdf,
            LineKind::ModuleDecl(name) => {
                if self.module.is_none() {
                    self.module = Some(name.to_string());
                } else {
                    tracing::trace!("ignoring repeated module declaration '{name}'");
                }
            }
            LineKind::Heading(heading) => match heading {
                Heading::LinkedModules => self.section = Section::Links,
                Heading::Tags => self.section = Section::Tags,
                Heading::Exports => self.section = Section::Exports,
                Heading::Other => {}
            },
            LineKind::Text(text) => self.feed_section_text(text),
        }
    }

    fn feed_section_text(&mut self, text: &str) {
        match self.section {
            Section::None => {
                if self.description.is_none() {
                    self.description = Some(text.to_string());
                }
            }
            Section::Links => match parse_link_item(text) {
                Some(link) => self.linked_modules.push(link),
                None => tracing::trace!("dropping malformed link line '{text}'"),
            },
            Section::Tags => {
                self.tags.extend(split_list(text));
                self.section = Section::None;
            }
            Section::Exports => {
                self.exports.extend(split_list(text));
                self.section = Section::None;
            }
        }
    }

    fn feed_rdf(&mut self, raw: &str) {
        if classify(strip_gutter(raw.trim())) == LineKind::RdfEnd {
            self.state = State::InHeader;
        } else {
            self.rdf_lines.push(raw.to_string());
        }
    }
}
