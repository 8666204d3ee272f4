//! Schedule command and query handlers.

mod errors;
mod export_schedule;
mod generate_schedule;
mod get_current_dose;
mod get_schedule;

pub use errors::ScheduleHandlerError;
pub use export_schedule::{ExportScheduleCommand, ExportScheduleHandler};
pub use generate_schedule::{
    GenerateScheduleCommand, GenerateScheduleHandler, GenerateScheduleResult,
};
pub use get_current_dose::{CurrentDoseResult, GetCurrentDoseHandler, GetCurrentDoseQuery};
pub use get_schedule::{GetScheduleHandler, GetScheduleQuery};
