//! Container handler trait.

use super::BlockEvent;

/// Handler for one container block type: `:::name params` ... `:::`
///
/// A handler is a pair of pure functions. [`validate`](Self::validate)
/// decides whether an opening marker belongs to this handler, and
/// [`render`](Self::render) produces the HTML fragment for one event.
///
/// # Statelessness
///
/// `render` is called once for the opening event and once for the closing
/// event. Nothing is carried between the two calls: anything the fragment
/// depends on is re-derived from `events[index]`. Handlers are therefore
/// `Send + Sync` and can be shared by concurrent renders.
///
/// # Contract
///
/// Any parameter string accepted by `validate` must not make `render` fail.
/// When `render` cannot re-derive its parameters it falls back to defaults
/// instead of panicking.
///
/// # Example
///
/// ```
/// use callout_renderer::{BlockEvent, ContainerHandler, Nesting};
///
/// struct NoteHandler;
///
/// impl ContainerHandler for NoteHandler {
///     fn name(&self) -> &str { "note" }
///
///     fn validate(&self, params: &str) -> bool {
///         params.trim() == "note"
///     }
///
///     fn render(&self, events: &[BlockEvent], index: usize) -> String {
///         match events.get(index).map(|e| e.nesting) {
///             Some(Nesting::Open) => r#"<div class="note">"#.to_owned(),
///             Some(Nesting::Close) => "</div>\n".to_owned(),
///             None => String::new(),
///         }
///     }
/// }
///
/// let events = [BlockEvent::open(" note"), BlockEvent::close("")];
/// assert!(NoteHandler.validate(" note"));
/// assert_eq!(NoteHandler.render(&events, 1), "</div>\n");
/// ```
pub trait ContainerHandler: Send + Sync {
    /// Block type name (e.g., "details", "message").
    fn name(&self) -> &str;

    /// Check whether the text after the opening colons belongs to this handler.
    fn validate(&self, params: &str) -> bool;

    /// Render the markup fragment for `events[index]`.
    ///
    /// Returns an empty string if `index` is out of range.
    fn render(&self, events: &[BlockEvent], index: usize) -> String;
}
