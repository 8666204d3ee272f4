//! HTTP handler for the chat endpoint.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::application::handlers::chat::{ChatHandler, IncomingMessage};
use crate::domain::foundation::UserId;

use super::dto::{ChatMessageRequest, ChatMessageResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    chat_handler: Arc<ChatHandler>,
}

impl ChatHandlers {
    pub fn new(chat_handler: Arc<ChatHandler>) -> Self {
        Self { chat_handler }
    }
}

/// POST /api/chat/messages - Feed one user message into the dialog
pub async fn post_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatMessageRequest>,
) -> impl IntoResponse {
    let msg = IncomingMessage::new(UserId::new(req.user_id), req.text);
    let replies = handlers.chat_handler.handle(msg).await;
    (StatusCode::OK, Json(ChatMessageResponse::from(replies)))
}
