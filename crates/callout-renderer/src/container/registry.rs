//! Registry of container handlers.

use std::sync::Arc;

use super::ContainerHandler;
use crate::handlers::{DetailsHandler, MessageHandler};

/// Ordered set of container handlers.
///
/// Handlers are consulted in registration order; the first whose
/// [`validate`](ContainerHandler::validate) accepts an opening marker owns
/// the block. Registering a handler whose name is already present replaces
/// the earlier one in place.
///
/// The registry is immutable once built and cheap to clone. [`Default`]
/// is the empty registry; use [`with_defaults`](Self::with_defaults) for the
/// built-in handlers.
///
/// # Example
///
/// ```
/// use callout_renderer::ContainerRegistry;
///
/// let registry = ContainerRegistry::with_defaults();
/// assert_eq!(registry.names(), vec!["details", "message"]);
/// assert_eq!(registry.find(" message alert").map(|h| h.name()), Some("message"));
/// assert!(registry.find(" warning").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ContainerRegistry {
    handlers: Vec<Arc<dyn ContainerHandler>>,
}

impl ContainerRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create a registry with the details and message handlers.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new()
            .with_handler(DetailsHandler)
            .with_handler(MessageHandler)
    }

    /// Register a handler.
    #[must_use]
    pub fn with_handler<H: ContainerHandler + 'static>(mut self, handler: H) -> Self {
        let handler: Arc<dyn ContainerHandler> = Arc::new(handler);
        if let Some(existing) = self
            .handlers
            .iter_mut()
            .find(|h| h.name() == handler.name())
        {
            *existing = handler;
        } else {
            self.handlers.push(handler);
        }
        self
    }

    /// Find the first handler that accepts `params`.
    #[must_use]
    pub fn find(&self, params: &str) -> Option<&dyn ContainerHandler> {
        self.handlers
            .iter()
            .find(|h| h.validate(params))
            .map(Arc::as_ref)
    }

    /// Look up a handler by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn ContainerHandler> {
        self.handlers
            .iter()
            .find(|h| h.name() == name)
            .map(Arc::as_ref)
    }

    /// Position of the first handler that accepts `params`.
    pub(crate) fn position(&self, params: &str) -> Option<usize> {
        self.handlers.iter().position(|h| h.validate(params))
    }

    /// Handler at a position returned by [`position`](Self::position).
    pub(crate) fn at(&self, idx: usize) -> &dyn ContainerHandler {
        self.handlers[idx].as_ref()
    }

    /// Names of registered handlers in dispatch order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for ContainerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContainerRegistry")
            .field("handlers", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockEvent;

    struct Catchall(&'static str);

    impl ContainerHandler for Catchall {
        fn name(&self) -> &str {
            self.0
        }

        fn validate(&self, _params: &str) -> bool {
            true
        }

        fn render(&self, _events: &[BlockEvent], _index: usize) -> String {
            self.0.to_owned()
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ContainerRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.find("details x").is_none());
    }

    #[test]
    fn test_defaults() {
        let registry = ContainerRegistry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["details", "message"]);
    }

    #[test]
    fn test_find_dispatches_by_validate() {
        let registry = ContainerRegistry::with_defaults();
        assert_eq!(
            registry.find("details Click me").map(|h| h.name()),
            Some("details")
        );
        assert_eq!(registry.find("message").map(|h| h.name()), Some("message"));
        assert!(registry.find("message foo").is_none());
        assert!(registry.find("details").is_none());
    }

    #[test]
    fn test_registration_order_wins() {
        let registry = ContainerRegistry::new()
            .with_handler(Catchall("first"))
            .with_handler(Catchall("second"));
        assert_eq!(registry.find("anything").map(|h| h.name()), Some("first"));
        assert_eq!(registry.position("anything"), Some(0));
    }

    #[test]
    fn test_same_name_replaces() {
        let registry = ContainerRegistry::with_defaults().with_handler(Catchall("details"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["details", "message"]);
        // The replacement accepts everything, so it now wins for "message" too.
        assert_eq!(registry.find("message").map(|h| h.name()), Some("details"));
    }

    #[test]
    fn test_get_by_name() {
        let registry = ContainerRegistry::with_defaults();
        assert!(registry.get("message").is_some());
        assert!(registry.get("tabs").is_none());
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = ContainerRegistry::with_defaults();
        assert_eq!(
            format!("{registry:?}"),
            r#"ContainerRegistry { handlers: ["details", "message"] }"#
        );
    }
}
