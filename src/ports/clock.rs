//! Clock Port - Source of "today".

use crate::domain::foundation::CourseDate;

/// Port supplying the current calendar date.
///
/// Status queries read "today" through this so they can be tested against
/// a fixed date.
pub trait Clock: Send + Sync {
    fn today(&self) -> CourseDate;
}
