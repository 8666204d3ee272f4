//! GetScheduleHandler - Query handler for a user's saved schedule.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::schedule::Schedule;
use crate::ports::ScheduleRepository;

use super::ScheduleHandlerError;

/// Query for the saved schedule of a user.
#[derive(Debug, Clone, Copy)]
pub struct GetScheduleQuery {
    pub user_id: UserId,
}

pub struct GetScheduleHandler {
    repository: Arc<dyn ScheduleRepository>,
}

impl GetScheduleHandler {
    pub fn new(repository: Arc<dyn ScheduleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetScheduleQuery) -> Result<Schedule, ScheduleHandlerError> {
        self.repository
            .load(query.user_id)
            .await?
            .ok_or(ScheduleHandlerError::NotFound(query.user_id))
    }
}
