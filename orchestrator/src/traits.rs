//! Trait definitions with mockall annotations for testing
//!
//! Collaborators injected into the serving layer live here so that handlers
//! can be exercised against mocks.

use crate::error::OrchestratorResult;
use shared::DepartmentHistoricalData;

/// Key under which ingested historical financials are staged
pub const HISTORICAL_FINANCIALS_KEY: &str = "historical_financials";

/// Keyed staging store for uploaded historical data.
///
/// Owned by the hosting process and handed to whoever needs it; the pipeline
/// never reads it directly, callers fetch the data and pass it in.
#[mockall::automock]
#[async_trait::async_trait]
pub trait HistoricalStore: Send + Sync {
    /// Replace whatever is stored under `key`
    async fn set(&self, key: &str, value: Vec<DepartmentHistoricalData>) -> OrchestratorResult<()>;

    /// Fetch a copy of the data under `key`, if any
    async fn get(&self, key: &str) -> OrchestratorResult<Option<Vec<DepartmentHistoricalData>>>;

    /// Drop every entry
    async fn clear(&self) -> OrchestratorResult<()>;
}
