//! Colored terminal output for command results and container warnings.

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter writing to stderr.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print container warnings for `source` (yellow), one per line.
    pub(crate) fn warnings(&self, source: &str, warnings: &[String]) {
        for warning in warnings {
            let line = format_warning(source, warning);
            let _ = self.term.write_line(&self.yellow.apply_to(line).to_string());
        }
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

/// Format a container warning as `source: warning`.
///
/// Stdin input (`-`) is shown as `<stdin>`.
pub(crate) fn format_warning(source: &str, warning: &str) -> String {
    let source = if source == "-" { "<stdin>" } else { source };
    format!("{source}: {warning}")
}

/// One-line summary of a document's warning count.
pub(crate) fn warning_summary(source: &str, count: usize) -> String {
    let source = if source == "-" { "<stdin>" } else { source };
    match count {
        0 => format!("{source}: ok"),
        1 => format!("{source}: 1 container warning"),
        n => format!("{source}: {n} container warnings"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_format_warning() {
        assert_eq!(
            format_warning("doc.md", "line 3: unclosed 'details' block"),
            "doc.md: line 3: unclosed 'details' block"
        );
    }

    #[test]
    fn test_format_warning_stdin() {
        assert_eq!(format_warning("-", "stray close"), "<stdin>: stray close");
    }

    #[test]
    fn test_warning_summary() {
        assert_eq!(warning_summary("doc.md", 0), "doc.md: ok");
        assert_eq!(warning_summary("doc.md", 1), "doc.md: 1 container warning");
        assert_eq!(warning_summary("-", 4), "<stdin>: 4 container warnings");
    }
}
