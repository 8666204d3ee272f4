//! Schedule error types.

use thiserror::Error;

use crate::domain::foundation::{CourseDate, DomainError, ErrorCode};

/// A persisted schedule that breaks the course invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("Schedule has no entries")]
    Empty,

    #[error("End date {end} is not after start date {start}")]
    EndNotAfterStart { start: CourseDate, end: CourseDate },

    #[error("First entry is dated {actual}, expected start date {expected}")]
    StartMismatch {
        expected: CourseDate,
        actual: CourseDate,
    },

    #[error("Last entry is dated {actual}, expected end date {expected}")]
    EndMismatch {
        expected: CourseDate,
        actual: CourseDate,
    },

    #[error("Entries are not consecutive days: {previous} is followed by {next}")]
    NotConsecutive {
        previous: CourseDate,
        next: CourseDate,
    },
}

impl From<ScheduleError> for DomainError {
    fn from(err: ScheduleError) -> Self {
        DomainError::new(ErrorCode::CorruptSchedule, err.to_string())
    }
}
