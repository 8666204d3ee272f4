//! Schedule Repository Port - Per-user schedule persistence.
//!
//! One schedule per user. Saving replaces whatever was stored before
//! (last write wins); no history is kept.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::schedule::Schedule;

/// Errors that can occur during repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Stored record for user {user_id} is invalid: {reason}")]
    CorruptRecord { user_id: UserId, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl RepositoryError {
    pub fn corrupt(user_id: UserId, reason: impl Into<String>) -> Self {
        RepositoryError::CorruptRecord {
            user_id,
            reason: reason.into(),
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        let code = match err {
            RepositoryError::CorruptRecord { .. } => ErrorCode::CorruptSchedule,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Port for storing and retrieving a user's schedule
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Store `schedule` for `user_id`, replacing any previous one.
    async fn save(&self, user_id: UserId, schedule: &Schedule) -> Result<(), RepositoryError>;

    /// Load the schedule stored for `user_id`.
    ///
    /// # Returns
    /// `Ok(None)` when the user has never saved a schedule.
    async fn load(&self, user_id: UserId) -> Result<Option<Schedule>, RepositoryError>;

    /// Check whether a schedule is stored for `user_id`.
    async fn exists(&self, user_id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.load(user_id).await?.is_some())
    }
}
