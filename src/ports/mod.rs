//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScheduleRepository` - Per-user schedule persistence (last write wins)
//! - `DialogStateStore` - Per-user dialog position between chat messages
//! - `ExportFileStorage` - Downloadable schedule artifacts
//! - `Clock` - Source of the current date

mod clock;
mod dialog_state_store;
mod export_file_storage;
mod schedule_repository;

pub use clock::Clock;
pub use dialog_state_store::DialogStateStore;
pub use export_file_storage::{ExportFileStorage, ExportStorageError};
pub use schedule_repository::{RepositoryError, ScheduleRepository};
