//! `::: message` and `::: message alert` callout blocks.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::escape::escape_html;
use crate::{BlockEvent, ContainerHandler, Nesting};

static MESSAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^message\s*(alert)?$").unwrap());

/// Callout flavor, used as the CSS class and the icon's accessible name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Plain informational message.
    #[default]
    Message,
    /// Warning-styled message.
    Alert,
}

impl MessageKind {
    /// Name used in markup: `"message"` or `"alert"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Alert => "alert",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `::: message` / `::: message alert` as an `<aside>` callout with
/// an inline "!" icon.
///
/// Nothing but the optional `alert` keyword may follow `message`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageHandler;

impl MessageHandler {
    /// Parse the message kind from marker parameters.
    ///
    /// Returns `None` if the parameters are not a message block.
    ///
    /// ```
    /// use callout_renderer::{MessageHandler, MessageKind};
    ///
    /// assert_eq!(MessageHandler::kind("message"), Some(MessageKind::Message));
    /// assert_eq!(MessageHandler::kind(" message alert"), Some(MessageKind::Alert));
    /// assert_eq!(MessageHandler::kind("message foo"), None);
    /// ```
    #[must_use]
    pub fn kind(params: &str) -> Option<MessageKind> {
        let caps = MESSAGE_PATTERN.captures(params.trim())?;
        Some(if caps.get(1).is_some() {
            MessageKind::Alert
        } else {
            MessageKind::Message
        })
    }
}

impl ContainerHandler for MessageHandler {
    fn name(&self) -> &'static str {
        "message"
    }

    fn validate(&self, params: &str) -> bool {
        Self::kind(params).is_some()
    }

    fn render(&self, events: &[BlockEvent], index: usize) -> String {
        let Some(event) = events.get(index) else {
            return String::new();
        };

        match event.nesting {
            Nesting::Open => {
                let kind = Self::kind(&event.info).unwrap_or_default();
                let name = escape_html(kind.as_str());
                format!(
                    concat!(
                        r#"<aside class="msg {name}">"#,
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 101 101" role="img" aria-label="{name}" class="msg-icon">"#,
                        r#"<circle cx="51" cy="51" r="50" fill="currentColor"></circle>"#,
                        r##"<text x="50%" y="50%" text-anchor="middle" fill="#ffffff" font-size="70" font-weight="bold" dominant-baseline="central">!</text>"##,
                        r#"</svg><div class="msg-content">"#,
                    ),
                    name = name
                )
            }
            Nesting::Close => "</div></aside>\n".to_owned(),
        }
    }
}
