//! Container block syntax: `:::name params` ... `:::`.
//!
//! # Processing Model
//!
//! 1. [`ContainerProcessor`] walks the markdown line by line, skipping fenced
//!    code blocks.
//! 2. An opening marker's parameter text is offered to each handler in the
//!    [`ContainerRegistry`]; the first whose `validate` accepts owns the block.
//! 3. The opening and closing markers become [`BlockEvent`]s in a document-wide
//!    event list, and the owner's `render` output replaces each marker line.
//!
//! The rendered fragments are surrounded by blank lines so pulldown-cmark
//! passes them through as raw HTML blocks and still parses the block body as
//! markdown.

mod event;
mod fence;
mod handler;
mod parser;
mod processor;
mod registry;

pub use event::{BlockEvent, Nesting};
pub use handler::ContainerHandler;
pub use processor::ContainerProcessor;
pub use registry::ContainerRegistry;
