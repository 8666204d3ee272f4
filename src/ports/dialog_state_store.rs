//! Dialog State Store Port - Per-user position in the calculation dialog.

use async_trait::async_trait;

use crate::domain::conversation::DialogState;
use crate::domain::foundation::UserId;

use super::RepositoryError;

/// Port for keeping each chat user's dialog state between messages
#[async_trait]
pub trait DialogStateStore: Send + Sync {
    /// Current state for `user_id`; `DialogState::Menu` when none is stored.
    async fn get(&self, user_id: UserId) -> Result<DialogState, RepositoryError>;

    /// Replace the state for `user_id`.
    async fn set(&self, user_id: UserId, state: DialogState) -> Result<(), RepositoryError>;

    /// Forget the state for `user_id`, returning it to the menu.
    async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError>;
}
