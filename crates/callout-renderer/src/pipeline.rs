//! Markdown to HTML with container blocks.

use pulldown_cmark::{Options, Parser, html};

use crate::{ContainerProcessor, ContainerRegistry};

/// Options for [`render_markdown`].
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Container handlers available to the document.
    pub registry: ContainerRegistry,
    /// Enable GitHub Flavored Markdown extensions.
    pub gfm: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            registry: ContainerRegistry::with_defaults(),
            gfm: true,
        }
    }
}

impl RenderOptions {
    /// Set the container registry.
    #[must_use]
    pub fn with_registry(mut self, registry: ContainerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }
}

/// Result of rendering markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Rendered HTML.
    pub html: String,
    /// Structural problems found in container markup.
    pub warnings: Vec<String>,
}

/// Render markdown with container blocks to HTML.
///
/// Container markers are expanded by a [`ContainerProcessor`] first, then
/// the result is rendered by pulldown-cmark. Rendering never fails; malformed
/// container markup is reported in [`RenderOutput::warnings`].
#[must_use]
pub fn render_markdown(input: &str, options: &RenderOptions) -> RenderOutput {
    let mut processor = ContainerProcessor::new(options.registry.clone());
    let preprocessed = processor.process(input);

    let parser = Parser::new_ext(&preprocessed, options.parser_options());
    let mut html = String::with_capacity(preprocessed.len() * 3 / 2);
    html::push_html(&mut html, parser);

    let warnings = processor.into_warnings();
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Container markup warnings");
    }

    RenderOutput { html, warnings }
}
