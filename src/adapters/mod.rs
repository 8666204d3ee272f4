//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Schedule and dialog persistence (JSON file, in-memory)
//! - `document` - Export artifacts on the local filesystem
//! - `clock` - System and fixed clocks
//! - `http` - axum routers for the chat and schedule endpoints

pub mod clock;
pub mod document;
pub mod http;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use document::LocalExportStorage;
pub use storage::{InMemoryDialogStateStore, InMemoryScheduleRepository, JsonFileScheduleRepository};
