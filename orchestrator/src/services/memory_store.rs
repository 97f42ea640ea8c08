//! In-process implementation of the historical data store

use crate::error::OrchestratorResult;
use crate::traits::HistoricalStore;
use async_trait::async_trait;
use shared::DepartmentHistoricalData;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Store backed by a shared `HashMap`; clones share the same data
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoricalStore {
    data: Arc<RwLock<HashMap<String, Vec<DepartmentHistoricalData>>>>,
}

impl InMemoryHistoricalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl HistoricalStore for InMemoryHistoricalStore {
    async fn set(&self, key: &str, value: Vec<DepartmentHistoricalData>) -> OrchestratorResult<()> {
        debug!(key, departments = value.len(), "storing historical data");
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> OrchestratorResult<Option<Vec<DepartmentHistoricalData>>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn clear(&self) -> OrchestratorResult<()> {
        self.data.write().await.clear();
        Ok(())
    }
}
