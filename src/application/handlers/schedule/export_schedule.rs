//! ExportScheduleHandler - Builds and stores the downloadable table.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::schedule::ScheduleDocument;
use crate::ports::{ExportFileStorage, ScheduleRepository};

use super::ScheduleHandlerError;

#[derive(Debug, Clone, Copy)]
pub struct ExportScheduleCommand {
    pub user_id: UserId,
}

pub struct ExportScheduleHandler {
    repository: Arc<dyn ScheduleRepository>,
    export_storage: Arc<dyn ExportFileStorage>,
}

impl ExportScheduleHandler {
    pub fn new(
        repository: Arc<dyn ScheduleRepository>,
        export_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            repository,
            export_storage,
        }
    }

    /// Renders the saved schedule and refreshes the artifact on disk.
    pub async fn handle(
        &self,
        cmd: ExportScheduleCommand,
    ) -> Result<ScheduleDocument, ScheduleHandlerError> {
        let schedule = self
            .repository
            .load(cmd.user_id)
            .await?
            .ok_or(ScheduleHandlerError::NotFound(cmd.user_id))?;

        let document = ScheduleDocument::for_user(cmd.user_id, &schedule);
        let path = self.export_storage.write(&document).await?;

        tracing::debug!(user_id = %cmd.user_id, path = %path.display(), "Exported schedule");
        Ok(document)
    }
}
