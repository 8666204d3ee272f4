//! HTTP routes for the chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{post_message, ChatHandlers};

/// Creates the chat router, mounted under `/api/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/messages", post(post_message))
        .with_state(handlers)
}
