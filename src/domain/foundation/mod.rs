//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the dosing domain.

mod course_date;
mod dose;
mod errors;
mod ids;
mod weight;

pub use course_date::{CourseDate, DATE_FORMAT, DATE_FORMAT_HINT};
pub use dose::Dose;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use weight::Weight;
