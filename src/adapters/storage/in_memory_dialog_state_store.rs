//! In-Memory Dialog State Store Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::DialogState;
use crate::domain::foundation::UserId;
use crate::ports::{DialogStateStore, RepositoryError};

/// Dialog states held in process memory; lost on restart, which returns
/// every user to the main menu.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDialogStateStore {
    states: Arc<RwLock<HashMap<UserId, DialogState>>>,
}

impl InMemoryDialogStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DialogStateStore for InMemoryDialogStateStore {
    async fn get(&self, user_id: UserId) -> Result<DialogState, RepositoryError> {
        Ok(self
            .states
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default())
    }

    async fn set(&self, user_id: UserId, state: DialogState) -> Result<(), RepositoryError> {
        let mut states = self.states.write().await;
        if state == DialogState::Menu {
            states.remove(&user_id);
        } else {
            states.insert(user_id, state);
        }
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        self.states.write().await.remove(&user_id);
        Ok(())
    }
}
