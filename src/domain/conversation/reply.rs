//! Outgoing chat messages and reply keyboards.

use serde::Serialize;

use crate::domain::schedule::ScheduleDocument;

use super::MenuAction;

/// A reply keyboard: rows of button labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
    pub one_time: bool,
    pub resize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Keyboard {
    /// The main menu. Download and current-dose buttons only appear once
    /// the user has a saved schedule.
    pub fn main_menu(has_schedule: bool) -> Self {
        let mut rows = vec![vec![MenuAction::GetCalculation.label().to_string()]];
        if has_schedule {
            rows.push(vec![MenuAction::DownloadSchedule.label().to_string()]);
            rows.push(vec![MenuAction::CurrentDose.label().to_string()]);
        }
        Self {
            rows,
            one_time: true,
            resize: true,
            placeholder: Some("Choose an action".to_string()),
        }
    }

    /// All button labels, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// What a reply does to the user's keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "action", content = "keyboard", rename_all = "snake_case")]
pub enum KeyboardUpdate {
    /// Leave whatever keyboard is showing.
    #[default]
    Keep,
    Show(Keyboard),
    Remove,
}

/// One message sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub keyboard: KeyboardUpdate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ScheduleDocument>,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardUpdate::Keep,
            document: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = KeyboardUpdate::Show(keyboard);
        self
    }

    pub fn removing_keyboard(mut self) -> Self {
        self.keyboard = KeyboardUpdate::Remove;
        self
    }

    /// A document message; `caption` becomes the text.
    pub fn document(caption: impl Into<String>, document: ScheduleDocument) -> Self {
        Self {
            text: caption.into(),
            keyboard: KeyboardUpdate::Keep,
            document: Some(document),
        }
    }
}
