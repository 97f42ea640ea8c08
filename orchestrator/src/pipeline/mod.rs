//! Four-stage optimization pipeline: prepare -> forecast -> optimize -> report
//!
//! The stage functions live in [`stages`]; [`executors`] provides the two
//! interchangeable ways of running them behind the [`PipelineExecutor`] trait.

pub mod executors;
pub mod stages;
pub mod traits;

pub use executors::{GraphExecutor, PipelineGraph, SequentialExecutor};
pub use stages::{run_stage, PipelineSettings, PipelineStage};
pub use traits::{MockPipelineExecutor, PipelineExecutor};
