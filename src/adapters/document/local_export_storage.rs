//! Local Filesystem Export Storage - Implementation of ExportFileStorage.
//!
//! Writes schedule tables into a flat export directory, one file per user.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::schedule::ScheduleDocument;
use crate::ports::{ExportFileStorage, ExportStorageError};

/// Local filesystem storage for export artifacts.
///
/// # Directory Structure
///
/// ```text
/// {base_path}/
/// ├── vitamin_schedule_1001.txt
/// └── vitamin_schedule_1002.txt
/// ```
///
/// # Atomic Writes
///
/// Content goes to `{name}.tmp` first, is synced, then renamed over the
/// final name.
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    base_path: PathBuf,
}

impl LocalExportStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Rejects names that would escape the export directory.
    fn checked_name(filename: &str) -> Result<&str, ExportStorageError> {
        let valid = !filename.is_empty()
            && !filename.contains(['/', '\\'])
            && filename != "."
            && filename != "..";
        if valid {
            Ok(filename)
        } else {
            Err(ExportStorageError::InvalidFileName(filename.to_string()))
        }
    }
}

#[async_trait]
impl ExportFileStorage for LocalExportStorage {
    async fn write(&self, document: &ScheduleDocument) -> Result<PathBuf, ExportStorageError> {
        let name = Self::checked_name(&document.filename)?;

        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            ExportStorageError::io(format!(
                "Failed to create export directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let final_path = self.base_path.join(name);
        let temp_path = self.base_path.join(format!("{}.tmp", name));

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportStorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(document.content.as_bytes())
            .await
            .map_err(|e| {
                ExportStorageError::io(format!(
                    "Failed to write to temp file {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;
        file.sync_all().await.map_err(|e| {
            ExportStorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportStorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::debug!("Wrote schedule export to {}", final_path.display());
        Ok(final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn document(name: &str, content: &str) -> ScheduleDocument {
        ScheduleDocument {
            filename: name.to_string(),
            content_type: "text/plain".to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn writes_document_into_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalExportStorage::new(temp_dir.path().join("exports"));

        let path = storage
            .write(&document("vitamin_schedule_1.txt", "Date\tDose"))
            .await
            .unwrap();

        assert_eq!(path, temp_dir.path().join("exports/vitamin_schedule_1.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Date\tDose");
        assert!(!temp_dir
            .path()
            .join("exports/vitamin_schedule_1.txt.tmp")
            .exists());
    }

    #[tokio::test]
    async fn overwrites_previous_export() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalExportStorage::new(temp_dir.path());

        storage.write(&document("a.txt", "old")).await.unwrap();
        let path = storage.write(&document("a.txt", "new")).await.unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalExportStorage::new(temp_dir.path());

        let result = storage.write(&document("../escape.txt", "x")).await;
        assert!(matches!(result, Err(ExportStorageError::InvalidFileName(_))));
    }
}
