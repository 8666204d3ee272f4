//! Export File Storage Port - Where schedule export artifacts are written.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::schedule::ScheduleDocument;

/// Port for persisting downloadable schedule tables.
///
/// # Contract
///
/// Implementations must:
/// - Write the whole document or nothing (no partial files)
/// - Overwrite an earlier artifact with the same file name
#[async_trait]
pub trait ExportFileStorage: Send + Sync {
    /// Write `document`, returning the path it was stored at.
    async fn write(&self, document: &ScheduleDocument) -> Result<PathBuf, ExportStorageError>;
}

/// Errors that can occur while storing an export artifact.
#[derive(Debug, Clone, Error)]
pub enum ExportStorageError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportStorageError {
    pub fn io(message: impl Into<String>) -> Self {
        ExportStorageError::IoError(message.into())
    }
}
