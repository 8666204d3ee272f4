//! Document adapters - export artifact storage.

mod local_export_storage;

pub use local_export_storage::LocalExportStorage;
