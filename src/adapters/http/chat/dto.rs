//! DTOs for the chat endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{Keyboard, KeyboardUpdate, OutgoingMessage};
use crate::domain::schedule::ScheduleDocument;

/// A message typed by a chat user, relayed by the platform bridge.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageRequest {
    pub user_id: i64,
    pub text: String,
}

/// Replies to send back, in order.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessageResponse {
    pub replies: Vec<ReplyResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Keyboard>,
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ScheduleDocument>,
}

impl From<OutgoingMessage> for ReplyResponse {
    fn from(msg: OutgoingMessage) -> Self {
        let (keyboard, remove_keyboard) = match msg.keyboard {
            KeyboardUpdate::Keep => (None, false),
            KeyboardUpdate::Show(keyboard) => (Some(keyboard), false),
            KeyboardUpdate::Remove => (None, true),
        };
        Self {
            text: msg.text,
            keyboard,
            remove_keyboard,
            document: msg.document,
        }
    }
}

impl From<Vec<OutgoingMessage>> for ChatMessageResponse {
    fn from(replies: Vec<OutgoingMessage>) -> Self {
        Self {
            replies: replies.into_iter().map(ReplyResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes() {
        let req: ChatMessageRequest =
            serde_json::from_str(r#"{"user_id": 123, "text": "/start"}"#).unwrap();
        assert_eq!(req.user_id, 123);
        assert_eq!(req.text, "/start");
    }

    #[test]
    fn keyboard_updates_flatten_into_reply_fields() {
        let shown: ReplyResponse = OutgoingMessage::text("menu")
            .with_keyboard(Keyboard::main_menu(false))
            .into();
        assert!(shown.keyboard.is_some());
        assert!(!shown.remove_keyboard);

        let removed: ReplyResponse = OutgoingMessage::text("weight?").removing_keyboard().into();
        assert!(removed.keyboard.is_none());
        assert!(removed.remove_keyboard);

        let json = serde_json::to_value(&removed).unwrap();
        assert!(json.get("keyboard").is_none());
        assert!(json.get("document").is_none());
    }
}
