//! In-Memory Schedule Repository Adapter
//!
//! Keeps schedules in a map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::schedule::Schedule;
use crate::ports::{RepositoryError, ScheduleRepository};

/// In-memory storage for schedules
#[derive(Debug, Clone, Default)]
pub struct InMemoryScheduleRepository {
    schedules: Arc<RwLock<HashMap<UserId, Schedule>>>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored schedules
    pub async fn count(&self) -> usize {
        self.schedules.read().await.len()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.schedules.write().await.clear();
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn save(&self, user_id: UserId, schedule: &Schedule) -> Result<(), RepositoryError> {
        self.schedules
            .write()
            .await
            .insert(user_id, schedule.clone());
        Ok(())
    }

    async fn load(&self, user_id: UserId) -> Result<Option<Schedule>, RepositoryError> {
        Ok(self.schedules.read().await.get(&user_id).cloned())
    }

    async fn exists(&self, user_id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.schedules.read().await.contains_key(&user_id))
    }
}
