//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where schedules and export artifacts live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding every user's schedule
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory receiving `vitamin_schedule_<id>.txt` files
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.data_file"));
        }
        if self.export_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.export_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("user_data.json")
}

fn default_export_dir() -> PathBuf {
    PathBuf::from("exports")
}
