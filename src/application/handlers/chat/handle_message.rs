//! ChatHandler - Drives the calculation dialog for one incoming message.
//!
//! The dialog is a small state machine kept per user in a
//! `DialogStateStore`:
//!
//! ```text
//! Menu --(weight)--> AwaitingStartDate --(date)--> Menu
//!   ^                        |
//!   +---(/start, /cancel)----+
//! ```
//!
//! Every terminal action returns the user to the main menu.

use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::schedule::{
    ExportScheduleCommand, ExportScheduleHandler, GenerateScheduleCommand,
    GenerateScheduleHandler, GetCurrentDoseHandler, GetCurrentDoseQuery, ScheduleHandlerError,
};
use crate::domain::conversation::messages::{
    self, ASK_WEIGHT, DOCUMENT_CAPTION, GENERIC_FAILURE, INVALID_WEIGHT, MAIN_MENU, NO_SCHEDULE,
};
use crate::domain::conversation::{DialogState, Keyboard, MenuAction, OutgoingMessage, UserInput};
use crate::domain::foundation::{CourseDate, UserId, Weight};
use crate::domain::schedule::WeightProfile;
use crate::ports::{Clock, DialogStateStore, ExportFileStorage, RepositoryError, ScheduleRepository};

/// A text message from a chat user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub user_id: UserId,
    pub text: String,
}

impl IncomingMessage {
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
        }
    }
}

/// Failures that abort a dialog step.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("schedule operation failed: {0}")]
    Schedule(#[from] ScheduleHandlerError),

    #[error("dialog state unavailable: {0}")]
    DialogState(#[from] RepositoryError),
}

pub struct ChatHandler {
    generate: GenerateScheduleHandler,
    current_dose: GetCurrentDoseHandler,
    export: ExportScheduleHandler,
    repository: Arc<dyn ScheduleRepository>,
    dialogs: Arc<dyn DialogStateStore>,
    clock: Arc<dyn Clock>,
}

impl ChatHandler {
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        export_storage: Arc<dyn ExportFileStorage>,
        dialogs: Arc<dyn DialogStateStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            generate: GenerateScheduleHandler::new(repository.clone(), export_storage.clone()),
            current_dose: GetCurrentDoseHandler::new(repository.clone(), clock.clone()),
            export: ExportScheduleHandler::new(repository.clone(), export_storage),
            repository,
            dialogs,
            clock,
        }
    }

    /// Handles one message and returns the replies, in order.
    ///
    /// Never fails: an internal error is logged, the user gets a generic
    /// apology and the dialog is reset to the main menu.
    pub async fn handle(&self, msg: IncomingMessage) -> Vec<OutgoingMessage> {
        match self.dispatch(&msg).await {
            Ok(replies) => replies,
            Err(err) => {
                tracing::error!(user_id = %msg.user_id, error = %err, "Failed to handle chat message");
                if let Err(e) = self.dialogs.clear(msg.user_id).await {
                    tracing::error!(user_id = %msg.user_id, error = %e, "Failed to reset dialog");
                }
                let has_schedule = self
                    .repository
                    .exists(msg.user_id)
                    .await
                    .unwrap_or(false);
                vec![OutgoingMessage::text(GENERIC_FAILURE)
                    .with_keyboard(Keyboard::main_menu(has_schedule))]
            }
        }
    }

    async fn dispatch(&self, msg: &IncomingMessage) -> Result<Vec<OutgoingMessage>, ChatError> {
        let user_id = msg.user_id;
        let input = UserInput::classify(&msg.text);
        let state = self.dialogs.get(user_id).await?;

        match (input, state) {
            (UserInput::Command(command), _) => {
                tracing::debug!(%user_id, command = command.as_str(), "Returning to main menu");
                self.dialogs.clear(user_id).await?;
                Ok(vec![self.main_menu(user_id).await?])
            }
            (UserInput::UnknownCommand(command), _) => {
                tracing::debug!(%user_id, %command, "Ignoring unknown command");
                Ok(Vec::new())
            }
            (_, DialogState::AwaitingStartDate { profile }) => {
                self.on_start_date(user_id, profile, &msg.text).await
            }
            (UserInput::Menu(MenuAction::GetCalculation), DialogState::Menu) => {
                Ok(vec![OutgoingMessage::text(ASK_WEIGHT).removing_keyboard()])
            }
            (UserInput::Menu(MenuAction::CurrentDose), DialogState::Menu) => {
                self.on_current_dose(user_id).await
            }
            (UserInput::Menu(MenuAction::DownloadSchedule), DialogState::Menu) => {
                self.on_download(user_id).await
            }
            (UserInput::Text(text), DialogState::Menu) => self.on_weight(user_id, &text).await,
        }
    }

    async fn on_weight(
        &self,
        user_id: UserId,
        text: &str,
    ) -> Result<Vec<OutgoingMessage>, ChatError> {
        let weight = match Weight::parse(text) {
            Ok(weight) => weight,
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "Rejected weight");
                return Ok(vec![OutgoingMessage::text(INVALID_WEIGHT)]);
            }
        };

        let profile = WeightProfile::for_weight(weight);
        self.dialogs
            .set(user_id, DialogState::AwaitingStartDate { profile })
            .await?;

        tracing::debug!(%user_id, tier = profile.tier().display_name(), "Weight accepted");
        Ok(vec![OutgoingMessage::text(messages::weight_accepted(&profile))])
    }

    async fn on_start_date(
        &self,
        user_id: UserId,
        profile: WeightProfile,
        text: &str,
    ) -> Result<Vec<OutgoingMessage>, ChatError> {
        let start_date = match CourseDate::parse(text) {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "Rejected start date");
                return Ok(vec![OutgoingMessage::text(messages::invalid_date())]);
            }
        };

        let result = self
            .generate
            .handle(GenerateScheduleCommand {
                user_id,
                weight: profile.weight,
                start_date,
            })
            .await?;
        self.dialogs.clear(user_id).await?;

        let today = self.clock.today();
        Ok(vec![
            OutgoingMessage::text(messages::schedule_created(&result.schedule, today)),
            OutgoingMessage::document(DOCUMENT_CAPTION, result.document),
            menu_message(true),
        ])
    }

    async fn on_current_dose(&self, user_id: UserId) -> Result<Vec<OutgoingMessage>, ChatError> {
        let query = GetCurrentDoseQuery { user_id, on: None };
        match self.current_dose.handle(query).await {
            Ok(result) => Ok(vec![
                OutgoingMessage::text(messages::current_dose(&result.status, result.date)),
                menu_message(true),
            ]),
            Err(ScheduleHandlerError::NotFound(_)) => Ok(no_schedule()),
            Err(e) => Err(e.into()),
        }
    }

    async fn on_download(&self, user_id: UserId) -> Result<Vec<OutgoingMessage>, ChatError> {
        match self.export.handle(ExportScheduleCommand { user_id }).await {
            Ok(document) => Ok(vec![
                OutgoingMessage::document(DOCUMENT_CAPTION, document),
                menu_message(true),
            ]),
            Err(ScheduleHandlerError::NotFound(_)) => Ok(no_schedule()),
            Err(e) => Err(e.into()),
        }
    }

    async fn main_menu(&self, user_id: UserId) -> Result<OutgoingMessage, ChatError> {
        let has_schedule = self.repository.exists(user_id).await?;
        Ok(menu_message(has_schedule))
    }
}

fn menu_message(has_schedule: bool) -> OutgoingMessage {
    OutgoingMessage::text(MAIN_MENU).with_keyboard(Keyboard::main_menu(has_schedule))
}

fn no_schedule() -> Vec<OutgoingMessage> {
    vec![OutgoingMessage::text(NO_SCHEDULE), menu_message(false)]
}
