//! DTOs for schedule endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::CurrentDoseResult;
use crate::domain::conversation::messages;
use crate::domain::foundation::{CourseDate, Dose, UserId};
use crate::domain::schedule::{CourseStatus, Schedule, ScheduleEntry};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Request to compute a course.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    /// Body weight in kg.
    pub weight: f64,
    /// First day of the course, `DD.MM.YYYY`.
    pub start_date: String,
}

/// Query parameters for the status endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    /// Date to evaluate, `DD.MM.YYYY`; defaults to today.
    pub date: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Full schedule view.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub user_id: UserId,
    pub weight: f64,
    pub tier: String,
    pub min_dose: Dose,
    pub max_dose: Dose,
    pub step: Dose,
    pub start_date: CourseDate,
    pub end_date: CourseDate,
    pub days: usize,
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleResponse {
    pub fn new(user_id: UserId, schedule: &Schedule) -> Self {
        let profile = schedule.profile();
        Self {
            user_id,
            weight: profile.weight.kg(),
            tier: profile.tier().display_name().to_string(),
            min_dose: profile.min_dose,
            max_dose: profile.max_dose,
            step: profile.step,
            start_date: schedule.start_date(),
            end_date: schedule.end_date(),
            days: schedule.len(),
            entries: schedule.entries().to_vec(),
        }
    }
}

/// Course status on one date.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub user_id: UserId,
    pub date: CourseDate,
    #[serde(flatten)]
    pub status: CourseStatus,
    /// The same answer the chat would give.
    pub message: String,
}

impl StatusResponse {
    pub fn new(user_id: UserId, result: CurrentDoseResult) -> Self {
        Self {
            user_id,
            date: result.date,
            status: result.status,
            message: messages::current_dose(&result.status, result.date),
        }
    }
}
