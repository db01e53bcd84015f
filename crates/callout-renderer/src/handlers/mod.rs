//! Built-in container handlers.

mod details;
mod message;

pub use details::DetailsHandler;
pub use message::{MessageHandler, MessageKind};
