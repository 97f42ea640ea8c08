//! Pipeline executor trait definition

use crate::error::OrchestratorResult;
use async_trait::async_trait;
use shared::{OptimizationRequest, OptimizationResult};

/// A way of running the prepare -> forecast -> optimize -> report stages.
///
/// Implementations differ only in how they sequence the stages; for the same
/// request every executor must produce the same allocations and totals.
#[mockall::automock]
#[async_trait]
pub trait PipelineExecutor: Send + Sync {
    /// Run the full pipeline for one request.
    ///
    /// The work is pure in-memory computation; the method is async so a
    /// serving layer can drive many independent runs without blocking.
    async fn execute(&self, request: OptimizationRequest) -> OrchestratorResult<OptimizationResult>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}
