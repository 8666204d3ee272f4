//! Tabular export of a schedule.

use serde::Serialize;

use crate::domain::foundation::UserId;

use super::Schedule;

/// MIME type of the exported table.
pub const TABLE_CONTENT_TYPE: &str = "text/tab-separated-values; charset=utf-8";

const TABLE_HEADER: &str = "Date\tDose";

/// Renders `Date\tDose` followed by one line per day, oldest first.
///
/// No trailing newline.
pub fn render_table(schedule: &Schedule) -> String {
    let mut lines = Vec::with_capacity(schedule.len() + 1);
    lines.push(TABLE_HEADER.to_string());
    lines.extend(
        schedule
            .entries()
            .iter()
            .map(|entry| format!("{}\t{}", entry.date, entry.dose)),
    );
    lines.join("\n")
}

/// A downloadable copy of a user's schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDocument {
    pub filename: String,
    pub content_type: String,
    pub content: String,
}

impl ScheduleDocument {
    /// Builds the export artifact for `user_id`.
    pub fn for_user(user_id: UserId, schedule: &Schedule) -> Self {
        Self {
            filename: Self::filename_for(user_id),
            content_type: TABLE_CONTENT_TYPE.to_string(),
            content: render_table(schedule),
        }
    }

    /// Artifact file name for a user: `vitamin_schedule_<id>.txt`.
    pub fn filename_for(user_id: UserId) -> String {
        format!("vitamin_schedule_{}.txt", user_id)
    }
}
