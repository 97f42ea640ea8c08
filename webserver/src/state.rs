//! Webserver state management
//!
//! Everything a handler needs is injected here at construction time; there is
//! no process-wide singleton.

use orchestrator::{GraphExecutor, HistoricalStore, InMemoryHistoricalStore, PipelineExecutor, SequentialExecutor};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct WebServerState {
    /// Staging area for ingested historical data
    pub store: Arc<dyn HistoricalStore>,

    /// Executor behind `/optimize/direct`
    pub direct_executor: Arc<dyn PipelineExecutor>,

    /// Executor behind `/optimize/agent` and `/optimize/scenarios`
    pub agent_executor: Arc<dyn PipelineExecutor>,

    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(
        store: Arc<dyn HistoricalStore>,
        direct_executor: Arc<dyn PipelineExecutor>,
        agent_executor: Arc<dyn PipelineExecutor>,
    ) -> Self {
        Self {
            store,
            direct_executor,
            agent_executor,
            server_start_time: Instant::now(),
        }
    }

    /// In-memory store with the sequential and graph executors
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(InMemoryHistoricalStore::new()),
            Arc::new(SequentialExecutor::new()),
            Arc::new(GraphExecutor::new()),
        )
    }

    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::with_defaults()
    }
}
