//! Dose schedule engine.
//!
//! Pure computation, no I/O:
//! - `tier` - weight tiers and the dose bounds they select
//! - `schedule` - the course generator and the `Schedule` aggregate
//! - `status` - classification of a date against a course
//! - `export` - tab-separated rendering of a course

mod errors;
mod export;
#[allow(clippy::module_inception)]
mod schedule;
mod status;
mod tier;

pub use errors::ScheduleError;
pub use export::{render_table, ScheduleDocument, TABLE_CONTENT_TYPE};
pub use schedule::{Schedule, ScheduleEntry};
pub use status::{evaluate, CourseStatus};
pub use tier::{WeightProfile, WeightTier};
