//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `schedule` - Dose schedule generation and course status
//! - `conversation` - Calculation dialog states, menu and reply texts

pub mod conversation;
pub mod foundation;
pub mod schedule;
