//! Errors raised by schedule command and query handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};
use crate::ports::{ExportStorageError, RepositoryError};

#[derive(Debug, Error)]
pub enum ScheduleHandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No schedule saved for user {0}")]
    NotFound(UserId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Export(#[from] ExportStorageError),
}

impl ScheduleHandlerError {
    /// True for failures caused by the caller's input rather than the system.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScheduleHandlerError::Validation(_) | ScheduleHandlerError::NotFound(_)
        )
    }
}

impl From<ScheduleHandlerError> for DomainError {
    fn from(err: ScheduleHandlerError) -> Self {
        match err {
            ScheduleHandlerError::Validation(e) => e.into(),
            ScheduleHandlerError::NotFound(user_id) => DomainError::new(
                ErrorCode::ScheduleNotFound,
                format!("No schedule saved for user {}", user_id),
            ),
            ScheduleHandlerError::Repository(e) => e.into(),
            ScheduleHandlerError::Export(e) => {
                DomainError::new(ErrorCode::StorageError, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_distinguished_from_system_errors() {
        assert!(ScheduleHandlerError::NotFound(UserId::new(1)).is_user_error());
        assert!(
            ScheduleHandlerError::Validation(ValidationError::empty_field("weight")).is_user_error()
        );
        assert!(
            !ScheduleHandlerError::Repository(RepositoryError::IoError("x".into())).is_user_error()
        );
    }

    #[test]
    fn not_found_maps_to_schedule_not_found() {
        let err: DomainError = ScheduleHandlerError::NotFound(UserId::new(4)).into();
        assert_eq!(err.code, ErrorCode::ScheduleNotFound);
        assert!(err.message.contains('4'));
    }
}
