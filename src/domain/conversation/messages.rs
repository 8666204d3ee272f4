//! User-facing message texts.

use crate::domain::foundation::{CourseDate, DATE_FORMAT_HINT};
use crate::domain::schedule::{CourseStatus, Schedule, WeightProfile};

pub const MAIN_MENU: &str = "Main menu:";
pub const ASK_WEIGHT: &str = "Enter your weight in kg:";
pub const INVALID_WEIGHT: &str = "Enter a valid weight (a number > 0)";
pub const NO_SCHEDULE: &str = "No saved schedule yet. Get a calculation first.";
pub const DOCUMENT_CAPTION: &str = "Your schedule";
pub const GENERIC_FAILURE: &str = "Something went wrong while processing your request";
pub const COURSE_COMPLETED: &str = "The course is already completed";

pub fn invalid_date() -> String {
    format!("Invalid date format! Use {}", DATE_FORMAT_HINT)
}

pub fn weight_accepted(profile: &WeightProfile) -> String {
    format!(
        "Weight: {} kg. Minimum dose: {} ml\nEnter the course start date ({}):",
        profile.weight, profile.min_dose, DATE_FORMAT_HINT
    )
}

/// Summary sent right after a schedule is generated.
pub fn schedule_created(schedule: &Schedule, today: CourseDate) -> String {
    format!(
        "Dates: {} - {}\nStep: {} ml\n{}",
        schedule.start_date(),
        schedule.end_date(),
        schedule.profile().step,
        creation_status(schedule, today)
    )
}

fn creation_status(schedule: &Schedule, today: CourseDate) -> String {
    let status = schedule.status_on(today);
    match status {
        CourseStatus::NotStarted { .. } => format!(
            "The course starts in {} days",
            status.days_until_start(today).unwrap_or_default()
        ),
        CourseStatus::InProgress { dose } => format!("Today's dose: {} ml", dose),
        CourseStatus::Completed => "The course is completed".to_string(),
    }
}

/// Answer to a "current dose" query.
pub fn current_dose(status: &CourseStatus, today: CourseDate) -> String {
    match status {
        CourseStatus::NotStarted {
            starts_on,
            starting_dose,
        } => format!(
            "The course starts on {}. Starting dose: {} ml",
            starts_on, starting_dose
        ),
        CourseStatus::InProgress { dose } => format!("Today ({}) dose: {} ml", today, dose),
        CourseStatus::Completed => COURSE_COMPLETED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Weight;

    fn date(text: &str) -> CourseDate {
        CourseDate::parse(text).unwrap()
    }

    fn schedule() -> Schedule {
        Schedule::generate(Weight::try_new(70.0).unwrap(), date("01.01.2024"))
    }

    #[test]
    fn weight_accepted_names_weight_and_min_dose() {
        let profile = WeightProfile::for_weight(Weight::try_new(70.0).unwrap());
        let text = weight_accepted(&profile);
        assert!(text.starts_with("Weight: 70.0 kg. Minimum dose: 0.2 ml"));
        assert!(text.contains("DD.MM.YYYY"));
    }

    #[test]
    fn schedule_created_lists_dates_and_step() {
        let text = schedule_created(&schedule(), date("15.12.2023"));
        assert!(text.contains("Dates: 01.01.2024 - 09.03.2024"));
        assert!(text.contains("Step: 0.2 ml"));
        assert!(text.contains("starts in 17 days"));
    }

    #[test]
    fn schedule_created_reports_todays_dose_when_running() {
        let text = schedule_created(&schedule(), date("03.01.2024"));
        assert!(text.contains("Today's dose: 0.6 ml"));
    }

    #[test]
    fn current_dose_texts() {
        let schedule = schedule();

        let before = date("31.12.2023");
        assert_eq!(
            current_dose(&schedule.status_on(before), before),
            "The course starts on 01.01.2024. Starting dose: 0.2 ml"
        );

        let during = date("04.02.2024");
        assert_eq!(
            current_dose(&schedule.status_on(during), during),
            "Today (04.02.2024) dose: 7.0 ml"
        );

        let after = date("10.03.2024");
        assert_eq!(current_dose(&schedule.status_on(after), after), COURSE_COMPLETED);
    }
}
