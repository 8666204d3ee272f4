//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod schedule;

pub use chat::{ChatError, ChatHandler, IncomingMessage};
pub use schedule::{
    CurrentDoseResult, ExportScheduleCommand, ExportScheduleHandler, GenerateScheduleCommand,
    GenerateScheduleHandler, GenerateScheduleResult, GetCurrentDoseHandler, GetCurrentDoseQuery,
    GetScheduleHandler, GetScheduleQuery, ScheduleHandlerError,
};
