//! Calculation dialog vocabulary.
//!
//! The dialog itself is driven by `application::handlers::chat`; this module
//! only holds the states, input classification, replies and texts.

mod input;
pub mod messages;
mod reply;
mod state;

pub use input::{BotCommand, MenuAction, UserInput};
pub use reply::{Keyboard, KeyboardUpdate, OutgoingMessage};
pub use state::DialogState;
