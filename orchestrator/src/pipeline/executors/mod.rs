//! Concrete pipeline executors

pub mod graph;
pub mod sequential;

pub use graph::{GraphExecutor, PipelineGraph};
pub use sequential::SequentialExecutor;
