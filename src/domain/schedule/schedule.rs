//! Schedule aggregate - a full titration course for one user.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseDate, Dose, Weight};

use super::{evaluate, CourseStatus, ScheduleError, WeightProfile};

/// One calendar day's prescribed dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: CourseDate,
    pub dose: Dose,
}

impl ScheduleEntry {
    pub fn new(date: CourseDate, dose: Dose) -> Self {
        Self { date, dose }
    }
}

/// A titration course: ramp up from the minimum to the peak dose one step
/// per day, then taper back down.
///
/// Immutable once built. A user repeating the flow gets a new `Schedule`
/// that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    profile: WeightProfile,
    start_date: CourseDate,
    end_date: CourseDate,
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Builds the day-by-day course for a weight starting on `start_date`.
    ///
    /// With `n = days_to_max` the course has `2n + 1` days:
    /// - days `0..=n` ramp up from `min_dose` by `step`; day `n` is pinned
    ///   to exactly `max_dose`
    /// - days `n+1..=2n` taper as `min_dose + (2n + 1 - day) * step`, so the
    ///   first taper day repeats the peak and the last day is
    ///   `min_dose + step`
    pub fn generate(weight: Weight, start_date: CourseDate) -> Self {
        let profile = WeightProfile::for_weight(weight);
        let days_to_max = profile.days_to_max();
        let mut entries = Vec::with_capacity(profile.course_length() as usize);

        for day in 0..=days_to_max {
            entries.push(ScheduleEntry::new(
                start_date.plus_days(day),
                profile.min_dose.plus_steps(profile.step, day),
            ));
        }
        if let Some(peak) = entries.last_mut() {
            peak.dose = profile.max_dose;
        }

        for day in 1..=days_to_max {
            entries.push(ScheduleEntry::new(
                start_date.plus_days(days_to_max + day),
                profile
                    .min_dose
                    .plus_steps(profile.step, days_to_max + 1 - day),
            ));
        }

        Self {
            profile,
            start_date,
            end_date: start_date.plus_days(2 * days_to_max),
            entries,
        }
    }

    /// Rebuilds a schedule from persisted parts, checking the course
    /// invariants: non-empty, one entry per consecutive day, bounded by
    /// `start_date` and `end_date`.
    pub fn restore(
        profile: WeightProfile,
        start_date: CourseDate,
        end_date: CourseDate,
        entries: Vec<ScheduleEntry>,
    ) -> Result<Self, ScheduleError> {
        let (first, last) = match (entries.first(), entries.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ScheduleError::Empty),
        };
        if end_date <= start_date {
            return Err(ScheduleError::EndNotAfterStart {
                start: start_date,
                end: end_date,
            });
        }
        if first.date != start_date {
            return Err(ScheduleError::StartMismatch {
                expected: start_date,
                actual: first.date,
            });
        }
        if last.date != end_date {
            return Err(ScheduleError::EndMismatch {
                expected: end_date,
                actual: last.date,
            });
        }
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| !pair[0].date.is_followed_by(pair[1].date))
        {
            return Err(ScheduleError::NotConsecutive {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }

        Ok(Self {
            profile,
            start_date,
            end_date,
            entries,
        })
    }

    pub fn profile(&self) -> &WeightProfile {
        &self.profile
    }

    pub fn weight(&self) -> Weight {
        self.profile.weight
    }

    pub fn start_date(&self) -> CourseDate {
        self.start_date
    }

    pub fn end_date(&self) -> CourseDate {
        self.end_date
    }

    /// Entries in ascending date order, one per day.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of days in the course.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a built schedule.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The peak day (first entry carrying the highest dose).
    pub fn peak(&self) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .reduce(|best, entry| if entry.dose > best.dose { entry } else { best })
    }

    /// The entry dated `date`, if it falls inside the course.
    pub fn entry_on(&self, date: CourseDate) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Classifies `today` against this course.
    pub fn status_on(&self, today: CourseDate) -> CourseStatus {
        evaluate(self, today)
    }
}
