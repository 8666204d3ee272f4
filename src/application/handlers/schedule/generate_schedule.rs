//! GenerateScheduleHandler - Command handler for computing and saving a course.

use std::sync::Arc;

use crate::domain::foundation::{CourseDate, UserId, Weight};
use crate::domain::schedule::{Schedule, ScheduleDocument};
use crate::ports::{ExportFileStorage, ScheduleRepository};

use super::ScheduleHandlerError;

/// Command to compute a new course for a user.
///
/// Inputs are already validated; parsing happens at the chat or HTTP edge.
#[derive(Debug, Clone)]
pub struct GenerateScheduleCommand {
    pub user_id: UserId,
    pub weight: Weight,
    pub start_date: CourseDate,
}

/// Result of successful generation.
#[derive(Debug, Clone)]
pub struct GenerateScheduleResult {
    pub schedule: Schedule,
    pub document: ScheduleDocument,
}

/// Handler for generating schedules.
pub struct GenerateScheduleHandler {
    repository: Arc<dyn ScheduleRepository>,
    export_storage: Arc<dyn ExportFileStorage>,
}

impl GenerateScheduleHandler {
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        export_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            repository,
            export_storage,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateScheduleCommand,
    ) -> Result<GenerateScheduleResult, ScheduleHandlerError> {
        // 1. Compute the course
        let schedule = Schedule::generate(cmd.weight, cmd.start_date);

        // 2. Write the downloadable table; a failure here leaves the saved course untouched
        let document = ScheduleDocument::for_user(cmd.user_id, &schedule);
        self.export_storage.write(&document).await?;

        // 3. Persist, replacing any earlier course
        self.repository.save(cmd.user_id, &schedule).await?;

        tracing::info!(
            user_id = %cmd.user_id,
            weight = cmd.weight.kg(),
            start = %schedule.start_date(),
            end = %schedule.end_date(),
            "Generated schedule"
        );

        Ok(GenerateScheduleResult { schedule, document })
    }
}
