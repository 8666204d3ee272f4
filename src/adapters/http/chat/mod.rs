//! HTTP adapter for the chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatMessageRequest, ChatMessageResponse, ReplyResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
