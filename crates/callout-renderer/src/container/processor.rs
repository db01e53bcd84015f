//! Container block processor.
//!
//! Replaces `:::` marker lines with handler output before pulldown-cmark runs.

use super::fence::FenceTracker;
use super::parser::{Marker, indent_of, parse_marker};
use super::{BlockEvent, ContainerRegistry};

/// Block that has been opened but not yet closed.
#[derive(Debug)]
struct OpenBlock {
    /// Registry position of the owning handler.
    handler: usize,
    /// Colon count of the opening marker; a closing marker must be at least this long.
    marker_len: usize,
    /// Line of the opening marker (1-indexed).
    line: usize,
    /// Leading spaces of the opening marker.
    indent: String,
}

/// Line-based preprocessor for container blocks.
///
/// For every accepted block the processor records an Open and a Close
/// [`BlockEvent`] and asks the owning handler to render each one. The
/// fragments replace the marker lines, separated from the body by blank lines
/// so the body is still parsed as markdown. A fragment keeps the indentation
/// of the marker it replaces, so a block indented under a list item stays
/// inside that item.
///
/// Markers are recognized only at the start of a line, after at most three
/// spaces. Markers behind a blockquote `>` or on the same line as a list
/// bullet are left as text.
///
/// Structural problems never abort processing; they are collected as
/// warnings:
///
/// - an opening marker no handler accepts (passed through unchanged)
/// - a closing marker with no open block (passed through unchanged)
/// - a block still open at end of input (closed implicitly, after closing
///   any code fence left open inside it)
///
/// Use one processor per document.
///
/// # Example
///
/// ```
/// use callout_renderer::{ContainerProcessor, ContainerRegistry};
///
/// let mut processor = ContainerProcessor::new(ContainerRegistry::with_defaults());
/// let output = processor.process("::: message alert\nCareful!\n:::");
///
/// assert!(output.contains(r#"<aside class="msg alert">"#));
/// assert!(output.contains("Careful!"));
/// assert!(output.contains("</div></aside>"));
/// assert_eq!(processor.events().len(), 2);
/// ```
#[derive(Debug)]
pub struct ContainerProcessor {
    registry: ContainerRegistry,
    fence: FenceTracker,
    events: Vec<BlockEvent>,
    open_blocks: Vec<OpenBlock>,
    warnings: Vec<String>,
}

impl Default for ContainerProcessor {
    fn default() -> Self {
        Self::new(ContainerRegistry::with_defaults())
    }
}

impl ContainerProcessor {
    /// Create a processor dispatching to `registry`.
    #[must_use]
    pub fn new(registry: ContainerRegistry) -> Self {
        Self {
            registry,
            fence: FenceTracker::new(),
            events: Vec::new(),
            open_blocks: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Preprocess markdown, replacing container markers with rendered HTML.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() + input.len() / 4);
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            let line_num = idx + 1;
            let processed = self.process_line(line, line_num);
            output.push_str(&processed);

            // Preserve line endings
            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        self.finalize(&mut output);

        output
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> String {
        // Markers inside code fences are content
        if self.fence.update(line) {
            return line.to_owned();
        }

        match parse_marker(line) {
            Some(marker) if marker.is_close() => self.close_block(line, marker, line_num),
            Some(marker) => self.open_block(line, marker, line_num),
            None => line.to_owned(),
        }
    }

    fn open_block(&mut self, line: &str, marker: Marker<'_>, line_num: usize) -> String {
        let Some(handler) = self.registry.position(marker.params) else {
            tracing::debug!(line = line_num, params = marker.params.trim(), "No handler");
            self.warnings.push(format!(
                "line {line_num}: no container handler accepts `{}`",
                marker.params.trim()
            ));
            return line.to_owned();
        };

        tracing::debug!(
            line = line_num,
            handler = self.registry.at(handler).name(),
            "Opening container block"
        );

        let indent = indent_of(line);
        self.open_blocks.push(OpenBlock {
            handler,
            marker_len: marker.colon_count,
            line: line_num,
            indent: indent.to_owned(),
        });
        self.emit(handler, indent, BlockEvent::open(marker.params))
    }

    fn close_block(&mut self, line: &str, marker: Marker<'_>, line_num: usize) -> String {
        let Some(block) = self.open_blocks.last() else {
            self.warnings.push(format!(
                "line {line_num}: stray {} with no open container block",
                ":".repeat(marker.colon_count)
            ));
            return line.to_owned();
        };

        // Shorter marker than the opener belongs to the body
        if marker.colon_count < block.marker_len {
            return line.to_owned();
        }

        let handler = block.handler;
        self.open_blocks.pop();
        self.emit(handler, indent_of(line), BlockEvent::close(marker.params))
    }

    /// Record an event and render it as a standalone HTML block.
    fn emit(&mut self, handler: usize, indent: &str, event: BlockEvent) -> String {
        self.events.push(event);
        let html = self
            .registry
            .at(handler)
            .render(&self.events, self.events.len() - 1);
        format!("\n{indent}{}\n", html.trim_end_matches('\n'))
    }

    fn finalize(&mut self, output: &mut String) {
        if self.open_blocks.is_empty() {
            if self.fence.in_fence() {
                tracing::debug!("Input ended inside a code fence");
            }
            return;
        }

        // A fence left open would swallow the closing fragments as code
        if let Some(fence) = self.fence.close() {
            tracing::warn!("Unclosed code fence inside container block");
            if !output.is_empty() && !output.ends_with('\n') {
                output.push('\n');
            }
            output.push_str(&fence);
            output.push('\n');
        }

        while let Some(block) = self.open_blocks.pop() {
            let name = self.registry.at(block.handler).name().to_owned();
            tracing::warn!(line = block.line, handler = %name, "Unclosed container block");
            self.warnings.push(format!(
                "line {}: unclosed container block `{name}` (missing closing :::)",
                block.line
            ));

            if !output.is_empty() && !output.ends_with('\n') {
                output.push('\n');
            }
            let fragment = self.emit(block.handler, &block.indent, BlockEvent::close(""));
            output.push_str(&fragment);
        }
    }

    /// Events recorded so far, in document order.
    #[must_use]
    pub fn events(&self) -> &[BlockEvent] {
        &self.events
    }

    /// Warnings generated during processing.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the processor, returning its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
