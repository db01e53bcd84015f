//! Details and message container blocks for markdown.
//!
//! This crate renders two custom block syntaxes on top of pulldown-cmark:
//!
//! ```text
//! ::: details Click to expand
//! Hidden **markdown** body.
//! :::
//!
//! ::: message alert
//! Something needs attention.
//! :::
//! ```
//!
//! # Architecture
//!
//! - [`ContainerHandler`]: a `validate`/`render` pair for one block type
//! - [`ContainerRegistry`]: the handlers known to a document, in dispatch order
//! - [`ContainerProcessor`]: scans markdown for `:::` markers and replaces
//!   them with handler output
//! - [`render_markdown`]: preprocessing followed by pulldown-cmark rendering
//!
//! Handlers are stateless. Each `render` call derives everything it needs
//! from the event it is pointed at, so a registry can be shared freely
//! between threads.
//!
//! # Example
//!
//! ```
//! use callout_renderer::{RenderOptions, render_markdown};
//!
//! let markdown = "::: details Click me\nHidden text\n:::\n";
//! let output = render_markdown(markdown, &RenderOptions::default());
//!
//! assert!(output.html.contains("<details><summary>Click me</summary>"));
//! assert!(output.html.contains("<p>Hidden text</p>"));
//! assert!(output.warnings.is_empty());
//! ```

mod container;
mod escape;
mod handlers;
mod pipeline;

pub use container::{
    BlockEvent, ContainerHandler, ContainerProcessor, ContainerRegistry, Nesting,
};
pub use escape::escape_html;
pub use handlers::{DetailsHandler, MessageHandler, MessageKind};
pub use pipeline::{RenderOptions, RenderOutput, render_markdown};
