//! Classification of incoming chat text.

use serde::{Deserialize, Serialize};

/// Slash commands the dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotCommand {
    /// `/start` - reset and show the main menu.
    Start,
    /// `/cancel` - abandon the current step and show the main menu.
    Cancel,
}

impl BotCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            BotCommand::Start => "/start",
            BotCommand::Cancel => "/cancel",
        }
    }
}

/// Main menu buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    GetCalculation,
    DownloadSchedule,
    CurrentDose,
}

impl MenuAction {
    /// Button text shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::GetCalculation => "Get calculation",
            MenuAction::DownloadSchedule => "Download schedule",
            MenuAction::CurrentDose => "Current dose",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        [
            MenuAction::GetCalculation,
            MenuAction::DownloadSchedule,
            MenuAction::CurrentDose,
        ]
        .into_iter()
        .find(|action| action.label() == text)
    }
}

/// An incoming message, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Command(BotCommand),
    /// A slash command the dialog does not handle; ignored.
    UnknownCommand(String),
    Menu(MenuAction),
    Text(String),
}

impl UserInput {
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.starts_with('/') {
            // Chat clients may append the bot name: `/start@VitaminBot`.
            let command = trimmed
                .split(|c: char| c == '@' || c.is_whitespace())
                .next()
                .unwrap_or(trimmed);
            return match command {
                "/start" => UserInput::Command(BotCommand::Start),
                "/cancel" => UserInput::Command(BotCommand::Cancel),
                _ => UserInput::UnknownCommand(command.to_string()),
            };
        }
        match MenuAction::from_label(trimmed) {
            Some(action) => UserInput::Menu(action),
            None => UserInput::Text(text.to_string()),
        }
    }
}
