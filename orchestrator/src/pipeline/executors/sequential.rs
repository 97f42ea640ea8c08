//! Direct, call-by-call pipeline execution

use crate::core::PipelineState;
use crate::error::OrchestratorResult;
use crate::pipeline::stages::{run_stage, PipelineSettings, PipelineStage};
use crate::pipeline::traits::PipelineExecutor;
use async_trait::async_trait;
use shared::{OptimizationRequest, OptimizationResult};
use tracing::debug;

pub const DIRECT_NOTE: &str = "Direct optimization";

/// Runs the four stages in a fixed sequence
#[derive(Debug, Clone)]
pub struct SequentialExecutor {
    settings: PipelineSettings,
    note: String,
}

impl SequentialExecutor {
    pub fn new() -> Self {
        Self::with_settings(PipelineSettings::default())
    }

    pub fn with_settings(settings: PipelineSettings) -> Self {
        Self {
            settings,
            note: DIRECT_NOTE.to_string(),
        }
    }

    /// Override the note attached to results
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Synchronous entry point for callers outside an async context
    pub fn run(&self, request: OptimizationRequest) -> OrchestratorResult<OptimizationResult> {
        let mut state = PipelineState::new(request).with_note(self.note.clone());
        for stage in PipelineStage::ALL {
            state = run_stage(stage, state, &self.settings)?;
        }
        debug!(executor = self.name(), "pipeline finished");
        state.into_result()
    }
}

impl Default for SequentialExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PipelineExecutor for SequentialExecutor {
    async fn execute(&self, request: OptimizationRequest) -> OrchestratorResult<OptimizationResult> {
        self.run(request)
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
