//! Course status - where "today" falls relative to a schedule.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{CourseDate, Dose};

use super::Schedule;

/// Three-way classification of a date against a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CourseStatus {
    /// The course begins after the reference date.
    NotStarted {
        starts_on: CourseDate,
        starting_dose: Dose,
    },
    /// The reference date is inside the course; `dose` is that day's dose.
    InProgress { dose: Dose },
    /// The course ended before the reference date.
    Completed,
}

impl CourseStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, CourseStatus::InProgress { .. })
    }

    /// Dose to take on the reference date, if any.
    pub fn dose(&self) -> Option<Dose> {
        match self {
            CourseStatus::InProgress { dose } => Some(*dose),
            _ => None,
        }
    }

    /// Days from `today` until the course starts; `None` unless not started.
    pub fn days_until_start(&self, today: CourseDate) -> Option<i64> {
        match self {
            CourseStatus::NotStarted { starts_on, .. } => Some(today.days_until(*starts_on)),
            _ => None,
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseStatus::NotStarted { starts_on, .. } => {
                write!(f, "Not started (starts {})", starts_on)
            }
            CourseStatus::InProgress { dose } => write!(f, "In progress ({} ml)", dose),
            CourseStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Classifies `today` against `schedule`.
///
/// Inside the course the dose is a step function: the dose of the latest
/// entry dated on or before `today`. Entries are scanned in order and the
/// scan stops at the first entry after `today`.
pub fn evaluate(schedule: &Schedule, today: CourseDate) -> CourseStatus {
    let not_started = || CourseStatus::NotStarted {
        starts_on: schedule.start_date(),
        starting_dose: schedule.profile().min_dose,
    };

    if today < schedule.start_date() {
        return not_started();
    }
    if today > schedule.end_date() {
        return CourseStatus::Completed;
    }

    let current = schedule
        .entries()
        .iter()
        .take_while(|entry| entry.date <= today)
        .last();

    match current {
        Some(entry) => CourseStatus::InProgress { dose: entry.dose },
        None => not_started(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Weight;

    fn date(text: &str) -> CourseDate {
        CourseDate::parse(text).unwrap()
    }

    fn standard_course() -> Schedule {
        Schedule::generate(Weight::try_new(70.0).unwrap(), date("01.01.2024"))
    }

    #[test]
    fn day_before_start_is_not_started() {
        let schedule = standard_course();
        let status = evaluate(&schedule, schedule.start_date().minus_days(1));
        assert_eq!(
            status,
            CourseStatus::NotStarted {
                starts_on: date("01.01.2024"),
                starting_dose: Dose::from_hundredths(20),
            }
        );
    }

    #[test]
    fn start_date_gives_min_dose() {
        let schedule = standard_course();
        let status = evaluate(&schedule, schedule.start_date());
        assert_eq!(status, CourseStatus::InProgress { dose: Dose::from_hundredths(20) });
    }

    #[test]
    fn end_date_gives_one_step_above_min() {
        let schedule = standard_course();
        let status = evaluate(&schedule, schedule.end_date());
        assert_eq!(status, CourseStatus::InProgress { dose: Dose::from_hundredths(40) });
    }

    #[test]
    fn day_after_end_is_completed() {
        let schedule = standard_course();
        let status = evaluate(&schedule, schedule.end_date().plus_days(1));
        assert_eq!(status, CourseStatus::Completed);
    }

    #[test]
    fn peak_day_gives_max_dose() {
        let schedule = standard_course();
        let status = schedule.status_on(date("04.02.2024"));
        assert_eq!(status.dose(), Some(Dose::from_hundredths(700)));
    }

    #[test]
    fn in_progress_dose_matches_entry_for_every_day() {
        let schedule = standard_course();
        for entry in schedule.entries() {
            assert_eq!(evaluate(&schedule, entry.date).dose(), Some(entry.dose));
        }
    }

    #[test]
    fn days_until_start_counts_calendar_days() {
        let schedule = standard_course();
        let today = date("25.12.2023");
        assert_eq!(schedule.status_on(today).days_until_start(today), Some(7));
        assert_eq!(schedule.status_on(date("01.01.2024")).days_until_start(today), None);
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let json = serde_json::to_value(CourseStatus::InProgress {
            dose: Dose::from_hundredths(40),
        })
        .unwrap();
        assert_eq!(json["state"], "in_progress");
        assert_eq!(json["dose"], 0.4);

        let json = serde_json::to_value(CourseStatus::Completed).unwrap();
        assert_eq!(json["state"], "completed");
    }
}
