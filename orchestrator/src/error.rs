//! Orchestrator-specific error types
//!
//! The forecasting and allocation core is infallible; these errors only come
//! from pipeline wiring and from the I/O around it.

use crate::pipeline::PipelineStage;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Pipeline stage {stage} ran out of order (last completed: {last_completed})")]
    StageOutOfOrder { stage: PipelineStage, last_completed: String },

    #[error("Pipeline finished without producing a result")]
    MissingResult,

    #[error("Pipeline graph is invalid: {reason}")]
    InvalidGraph { reason: String },

    #[error("Configuration error: {field}")]
    ConfigurationError { field: String },

    #[error("Request validation failed: {0}")]
    Validation(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl OrchestratorError {
    pub fn config(field: impl Into<String>) -> Self {
        Self::ConfigurationError { field: field.into() }
    }

    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        Self::InvalidGraph { reason: reason.into() }
    }
}

pub type OrchestratorResult<T> = Result<T, OrchestratorError>;
