//! Persisted form of a schedule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseDate, Dose, UserId, Weight};
use crate::domain::schedule::{Schedule, ScheduleEntry, WeightProfile};
use crate::ports::RepositoryError;

/// One user's stored schedule.
///
/// ```json
/// {
///   "weight": 70.0, "min_dose": 0.2, "max_dose": 7.0, "step": 0.2,
///   "start_date": "01.01.2024", "end_date": "09.03.2024",
///   "schedule": [{"date": "01.01.2024", "dose": 0.2}, ...]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub weight: Weight,
    pub min_dose: Dose,
    pub max_dose: Dose,
    pub step: Dose,
    pub start_date: CourseDate,
    pub end_date: CourseDate,
    pub schedule: Vec<ScheduleEntry>,
}

impl ScheduleRecord {
    /// Rebuild the domain schedule, rejecting records that break course
    /// invariants.
    pub fn into_schedule(self, user_id: UserId) -> Result<Schedule, RepositoryError> {
        let profile = WeightProfile {
            weight: self.weight,
            min_dose: self.min_dose,
            max_dose: self.max_dose,
            step: self.step,
        };
        Schedule::restore(profile, self.start_date, self.end_date, self.schedule)
            .map_err(|e| RepositoryError::corrupt(user_id, e.to_string()))
    }
}

impl From<&Schedule> for ScheduleRecord {
    fn from(schedule: &Schedule) -> Self {
        let profile = schedule.profile();
        Self {
            weight: profile.weight,
            min_dose: profile.min_dose,
            max_dose: profile.max_dose,
            step: profile.step,
            start_date: schedule.start_date(),
            end_date: schedule.end_date(),
            schedule: schedule.entries().to_vec(),
        }
    }
}
