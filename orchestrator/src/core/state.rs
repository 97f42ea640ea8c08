//! Typed accumulator threaded through the pipeline stages
//!
//! Each stage takes the state by value, fills in its own fields and hands it
//! on. `last_completed` records progress so a stage cannot run before the
//! stages whose output it reads.

use super::allocation::BudgetAllocation;
use crate::error::{OrchestratorError, OrchestratorResult};
use crate::pipeline::PipelineStage;
use shared::{OptimizationRequest, OptimizationResult};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PipelineState {
    /// Input for this run; never modified by the stages
    pub request: OptimizationRequest,

    /// Free-text annotation attached to the final result
    pub note: Option<String>,

    /// Most recent stage to finish, `None` before `prepare`
    pub last_completed: Option<PipelineStage>,

    // prepare
    pub departments: Vec<String>,

    // forecast
    pub impact_per_unit: HashMap<String, f64>,

    // optimize
    pub allocations: BudgetAllocation,

    // report
    pub result: Option<OptimizationResult>,
}

impl PipelineState {
    pub fn new(request: OptimizationRequest) -> Self {
        Self {
            request,
            note: None,
            last_completed: None,
            departments: Vec::new(),
            impact_per_unit: HashMap::new(),
            allocations: BudgetAllocation::default(),
            result: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Stage expected to run next, `None` once `report` has completed
    pub fn next_stage(&self) -> Option<PipelineStage> {
        match self.last_completed {
            None => Some(PipelineStage::Prepare),
            Some(stage) => stage.next(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.last_completed == Some(PipelineStage::Report)
    }

    /// Consume the state, yielding the report
    pub fn into_result(self) -> OrchestratorResult<OptimizationResult> {
        self.result.ok_or(OrchestratorError::MissingResult)
    }
}
