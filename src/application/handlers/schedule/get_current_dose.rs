//! GetCurrentDoseHandler - Query handler evaluating a course on a date.

use std::sync::Arc;

use crate::domain::foundation::{CourseDate, UserId};
use crate::domain::schedule::CourseStatus;
use crate::ports::{Clock, ScheduleRepository};

use super::ScheduleHandlerError;

/// Query for the course status of a user.
#[derive(Debug, Clone, Copy)]
pub struct GetCurrentDoseQuery {
    pub user_id: UserId,
    /// Date to evaluate; `None` means the clock's today.
    pub on: Option<CourseDate>,
}

/// The evaluated status together with the date it was evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentDoseResult {
    pub date: CourseDate,
    pub status: CourseStatus,
}

pub struct GetCurrentDoseHandler {
    repository: Arc<dyn ScheduleRepository>,
    clock: Arc<dyn Clock>,
}

impl GetCurrentDoseHandler {
    pub fn new(repository: Arc<dyn ScheduleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        query: GetCurrentDoseQuery,
    ) -> Result<CurrentDoseResult, ScheduleHandlerError> {
        let schedule = self
            .repository
            .load(query.user_id)
            .await?
            .ok_or(ScheduleHandlerError::NotFound(query.user_id))?;

        let date = query.on.unwrap_or_else(|| self.clock.today());
        let status = schedule.status_on(date);

        tracing::debug!(user_id = %query.user_id, %date, %status, "Evaluated course status");

        Ok(CurrentDoseResult { date, status })
    }
}
