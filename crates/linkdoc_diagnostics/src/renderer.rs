//! Finding rendering backends for human-readable output.

use crate::finding::Finding;
use crate::severity::Severity;

/// Trait for rendering findings into formatted output strings.
pub trait FindingRenderer {
    /// Renders a single finding into a formatted string.
    fn render(&self, finding: &Finding) -> String;
}

/// Renders findings in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[E103]: broken link to 'types/location' (resolved to: /repo/types/location.go)
///   --> handlers/location.go
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_severity(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let ansi = match severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
        };
        format!("{ansi}{text}\x1b[0m")
    }
}

impl FindingRenderer for TerminalRenderer {
    fn render(&self, finding: &Finding) -> String {
        let mut out = String::new();

        let head = format!("{}[{}]", finding.severity, finding.code);
        out.push_str(&format!(
            "{}: {}\n",
            self.paint_severity(finding.severity, &head),
            finding.message
        ));
        out.push_str(&format!("  --> {}\n", finding.file_path.display()));

        for help in &finding.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}
