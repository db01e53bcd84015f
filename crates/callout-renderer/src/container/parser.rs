//! Container marker line parsing.
//!
//! A marker line is up to three spaces of indentation, a run of at least
//! three colons, then the parameter text: `::: details Summary`.

/// Minimum number of colons in a marker.
const MIN_MARKER_LEN: usize = 3;

/// Maximum indentation before a marker; four spaces make an indented code block.
const MAX_INDENT: usize = 3;

/// Marker found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Marker<'a> {
    /// Number of colons in the marker run.
    pub colon_count: usize,
    /// Everything after the colon run, untrimmed.
    pub params: &'a str,
}

impl Marker<'_> {
    /// A marker with nothing but whitespace after the colons can only close a block.
    pub(crate) fn is_close(&self) -> bool {
        self.params.trim().is_empty()
    }
}

/// Strip up to three leading spaces.
///
/// Returns `None` if the line is indented further, which makes it an indented
/// code block or a continuation rather than a marker or fence.
pub(crate) fn strip_indent(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(' ');
    (line.len() - rest.len() <= MAX_INDENT).then_some(rest)
}

/// Leading spaces of a line, kept when the marker is replaced.
pub(crate) fn indent_of(line: &str) -> &str {
    &line[..line.len() - line.trim_start_matches(' ').len()]
}

/// Parse a line as a container marker.
///
/// Returns `None` if the line is not a marker.
pub(crate) fn parse_marker(line: &str) -> Option<Marker<'_>> {
    let rest = strip_indent(line)?;
    let colon_count = rest.bytes().take_while(|&b| b == b':').count();
    if colon_count < MIN_MARKER_LEN {
        return None;
    }

    Some(Marker {
        colon_count,
        params: &rest[colon_count..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_opening_marker() {
        let marker = parse_marker("::: details Click me").unwrap();
        assert_eq!(marker.colon_count, 3);
        assert_eq!(marker.params, " details Click me");
        assert!(!marker.is_close());
    }

    #[test]
    fn test_parse_marker_without_space() {
        let marker = parse_marker(":::message").unwrap();
        assert_eq!(marker.params, "message");
    }

    #[test]
    fn test_parse_closing_marker() {
        let marker = parse_marker(":::").unwrap();
        assert!(marker.is_close());

        let marker = parse_marker("::::   ").unwrap();
        assert_eq!(marker.colon_count, 4);
        assert!(marker.is_close());
    }

    #[test]
    fn test_two_colons_not_marker() {
        assert!(parse_marker(":: details x").is_none());
        assert!(parse_marker("text ::: details").is_none());
        assert!(parse_marker("").is_none());
    }

    #[test]
    fn test_strip_indent() {
        assert_eq!(strip_indent("   ```"), Some("```"));
        assert_eq!(strip_indent("    ```"), None);
        assert_eq!(strip_indent("\t```"), Some("\t```"));
    }

    #[test]
    fn test_indent_of() {
        assert_eq!(indent_of("  ::: details x"), "  ");
        assert_eq!(indent_of(":::"), "");
    }

    #[test]
    fn test_indentation_limit() {
        assert!(parse_marker("   ::: message").is_some());
        assert!(parse_marker("    ::: message").is_none());
    }
}
