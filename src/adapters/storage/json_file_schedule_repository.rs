//! JSON File Schedule Repository Adapter
//!
//! Keeps every user's schedule in a single JSON object file keyed by user id.
//! Each save reads the whole file, replaces one key and rewrites the file.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::domain::schedule::Schedule;
use crate::ports::{RepositoryError, ScheduleRepository};

use super::ScheduleRecord;

/// File-backed schedule repository.
///
/// # Atomic Writes
///
/// The file is rewritten through `<file>.tmp` followed by a rename, so a
/// crash mid-write leaves the previous contents intact. Saves inside one
/// process are serialized; the last save for a user wins.
#[derive(Debug)]
pub struct JsonFileScheduleRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileScheduleRepository {
    /// Create a repository over the JSON file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Read the whole file. A missing or unreadable document counts as empty.
    async fn read_all(&self) -> Result<Map<String, Value>, RepositoryError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(RepositoryError::IoError(e.to_string())),
        };

        match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(all) => Ok(all),
            Err(e) => {
                tracing::warn!(
                    "Schedule file {} is not a JSON object, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            }
        }
    }

    async fn write_all(&self, all: &Map<String, Value>) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(all)
            .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::IoError(e.to_string()))?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            RepositoryError::IoError(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.write_all(json.as_bytes()).await.map_err(|e| {
            RepositoryError::IoError(format!(
                "Failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;
        file.sync_all()
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            RepositoryError::IoError(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ScheduleRepository for JsonFileScheduleRepository {
    async fn save(&self, user_id: UserId, schedule: &Schedule) -> Result<(), RepositoryError> {
        let record = serde_json::to_value(ScheduleRecord::from(schedule))
            .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?;

        let _guard = self.write_lock.lock().await;
        let mut all = self.read_all().await?;
        all.insert(user_id.to_string(), record);
        self.write_all(&all).await?;

        tracing::debug!(
            "Saved schedule for user {} ({} days) to {}",
            user_id,
            schedule.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self, user_id: UserId) -> Result<Option<Schedule>, RepositoryError> {
        let mut all = self.read_all().await?;
        let value = match all.remove(&user_id.to_string()) {
            Some(value) => value,
            None => return Ok(None),
        };

        let record: ScheduleRecord = serde_json::from_value(value)
            .map_err(|e| RepositoryError::corrupt(user_id, e.to_string()))?;
        record.into_schedule(user_id).map(Some)
    }
}
