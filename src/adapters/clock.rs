//! Clock adapters.

use chrono::Local;

use crate::domain::foundation::CourseDate;
use crate::ports::Clock;

/// Today's date in the server's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CourseDate {
        CourseDate::from_naive(Local::now().date_naive())
    }
}

/// A clock stuck on one date (testing).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(CourseDate);

impl FixedClock {
    pub fn new(today: CourseDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CourseDate {
        self.0
    }
}
