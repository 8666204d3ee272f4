//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Chat
    ChatHandler, IncomingMessage,
    // Schedule commands
    ExportScheduleCommand, ExportScheduleHandler, GenerateScheduleCommand,
    GenerateScheduleHandler, GenerateScheduleResult,
    // Schedule queries
    CurrentDoseResult, GetCurrentDoseHandler, GetCurrentDoseQuery, GetScheduleHandler,
    GetScheduleQuery,
    // Errors
    ChatError, ScheduleHandlerError,
};
