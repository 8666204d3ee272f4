//! Storage Adapters
//!
//! Implementations of the `ScheduleRepository` and `DialogStateStore` ports.
//!
//! ## Available Adapters
//!
//! - **JsonFileScheduleRepository** - All schedules in one JSON file on disk
//! - **InMemoryScheduleRepository** - Schedules in memory (testing/development)
//! - **InMemoryDialogStateStore** - Dialog positions in memory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{JsonFileScheduleRepository, InMemoryScheduleRepository};
//!
//! // Production: file-based storage
//! let repo = JsonFileScheduleRepository::new("./user_data.json");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryScheduleRepository::new();
//! ```

mod in_memory_dialog_state_store;
mod in_memory_schedule_repository;
mod json_file_schedule_repository;
mod schedule_record;

pub use in_memory_dialog_state_store::InMemoryDialogStateStore;
pub use in_memory_schedule_repository::InMemoryScheduleRepository;
pub use json_file_schedule_repository::JsonFileScheduleRepository;
pub use schedule_record::ScheduleRecord;
