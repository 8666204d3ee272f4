//! Calendar date value object with the `DD.MM.YYYY` textual form.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Textual pattern users type dates in, and the form dates are persisted in.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Human-readable form of [`DATE_FORMAT`] for prompts.
pub const DATE_FORMAT_HINT: &str = "DD.MM.YYYY";

/// A calendar day with no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseDate(NaiveDate);

impl CourseDate {
    /// Wraps a chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its parts, `None` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses `DD.MM.YYYY`, rejecting impossible days like `31.02.2024`.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("start_date"));
        }
        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|e| {
                ValidationError::invalid_format(
                    "start_date",
                    format!("expected {} ({})", DATE_FORMAT_HINT, e),
                )
            })
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` days later.
    pub fn plus_days(&self, days: u32) -> Self {
        Self(self.0 + Duration::days(i64::from(days)))
    }

    /// Returns the date `days` days earlier.
    pub fn minus_days(&self, days: u32) -> Self {
        Self(self.0 - Duration::days(i64::from(days)))
    }

    /// Whole days from `self` until `later`; negative if `later` is earlier.
    pub fn days_until(&self, later: CourseDate) -> i64 {
        (later.0 - self.0).num_days()
    }

    /// True when `other` is exactly the following calendar day.
    pub fn is_followed_by(&self, other: CourseDate) -> bool {
        self.days_until(other) == 1
    }
}

impl fmt::Display for CourseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CourseDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CourseDate {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CourseDate> for String {
    fn from(date: CourseDate) -> Self {
        date.to_string()
    }
}
