//! Chat dialog handler.

mod handle_message;

pub use handle_message::{ChatError, ChatHandler, IncomingMessage};
