//! `::: details Summary` disclosure blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::{BlockEvent, ContainerHandler, Nesting};

static DETAILS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^details\s+(.*)$").unwrap());

/// Renders `::: details Summary` as a `<details>` disclosure widget.
///
/// The keyword must be followed by at least one whitespace character; the
/// rest of the line is the summary, HTML-escaped on output.
///
/// ```text
/// ::: details Click me
/// Hidden content
/// :::
/// ```
///
/// becomes
///
/// ```html
/// <details><summary>Click me</summary><div class="details-content">
/// <p>Hidden content</p>
/// </div></details>
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailsHandler;

impl DetailsHandler {
    /// Extract the summary from marker parameters.
    ///
    /// Returns `None` if the parameters are not a details block.
    ///
    /// ```
    /// use callout_renderer::DetailsHandler;
    ///
    /// assert_eq!(DetailsHandler::summary(" details Click me "), Some("Click me"));
    /// assert_eq!(DetailsHandler::summary("details"), None);
    /// ```
    #[must_use]
    pub fn summary(params: &str) -> Option<&str> {
        DETAILS_PATTERN
            .captures(params.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl ContainerHandler for DetailsHandler {
    fn name(&self) -> &'static str {
        "details"
    }

    fn validate(&self, params: &str) -> bool {
        Self::summary(params).is_some()
    }

    fn render(&self, events: &[BlockEvent], index: usize) -> String {
        let Some(event) = events.get(index) else {
            return String::new();
        };

        match event.nesting {
            Nesting::Open => {
                let summary = Self::summary(&event.info).unwrap_or_default();
                format!(
                    r#"<details><summary>{}</summary><div class="details-content">"#,
                    escape_html(summary)
                )
            }
            Nesting::Close => "</div></details>\n".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_open(info: &str) -> String {
        DetailsHandler.render(&[BlockEvent::open(info)], 0)
    }

    #[test]
    fn test_validate_accepts_summary() {
        assert!(DetailsHandler.validate("details Click me"));
        assert!(DetailsHandler.validate("  details   spaced out  "));
        assert!(DetailsHandler.validate("details\tTabbed"));
    }

    #[test]
    fn test_validate_requires_whitespace_after_keyword() {
        assert!(!DetailsHandler.validate("details"));
        assert!(!DetailsHandler.validate("details   "));
        assert!(!DetailsHandler.validate("detailsX"));
        assert!(!DetailsHandler.validate("summary details x"));
        assert!(!DetailsHandler.validate(""));
    }

    #[test]
    fn test_render_open() {
        assert_eq!(
            render_open("details Click me"),
            r#"<details><summary>Click me</summary><div class="details-content">"#
        );
    }

    #[test]
    fn test_render_open_trims_info() {
        assert_eq!(
            render_open("  details Click me  "),
            r#"<details><summary>Click me</summary><div class="details-content">"#
        );
    }

    #[test]
    fn test_render_close() {
        let events = [BlockEvent::open("details x"), BlockEvent::close("")];
        assert_eq!(DetailsHandler.render(&events, 1), "</div></details>\n");
    }

    #[test]
    fn test_summary_is_escaped() {
        let html = render_open(r#"details <b>&"'"#);
        assert_eq!(
            html,
            r#"<details><summary>&lt;b&gt;&amp;&quot;&#x27;</summary><div class="details-content">"#
        );
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_script_summary_is_escaped() {
        let html = render_open("details <script>");
        assert!(html.contains("<summary>&lt;script&gt;</summary>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_fallback_on_mismatch() {
        assert_eq!(
            render_open("not a details block"),
            r#"<details><summary></summary><div class="details-content">"#
        );
    }

    #[test]
    fn test_render_out_of_range() {
        assert_eq!(DetailsHandler.render(&[], 0), "");
    }

    #[test]
    fn test_render_is_pure() {
        let events = [BlockEvent::open("details Same")];
        assert_eq!(
            DetailsHandler.render(&events, 0),
            DetailsHandler.render(&events, 0)
        );
    }

    #[test]
    fn test_summary_keeps_inner_whitespace() {
        assert_eq!(DetailsHandler::summary("details  a  b"), Some("a  b"));
    }
}
