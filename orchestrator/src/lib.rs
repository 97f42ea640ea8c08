//! Orchestrator library for forecast-driven budget allocation
//!
//! This library projects each department's historical series forward, turns
//! the projection into an impact score, and distributes a fixed budget across
//! departments under floor/ceiling constraints. A four-stage pipeline ties the
//! pieces together and a scenario runner fans one request out into what-if
//! variants.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod scenarios;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{allocate_budget, estimate_future_impact, forecast, AllocatorSettings, BudgetAllocation, PipelineState};
pub use error::{OrchestratorError, OrchestratorResult};
pub use pipeline::{GraphExecutor, PipelineExecutor, PipelineGraph, PipelineSettings, PipelineStage, SequentialExecutor};
pub use scenarios::{derive_request, run_scenarios, run_scenarios_concurrent};
pub use services::InMemoryHistoricalStore;
pub use traits::{HistoricalStore, HISTORICAL_FINANCIALS_KEY};
