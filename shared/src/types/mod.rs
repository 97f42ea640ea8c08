//! Core types used throughout the budget optimization system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

pub mod optimization;
pub mod resources;
pub mod scenario;

pub use optimization::*;
pub use resources::*;
pub use scenario::*;

/// Global process ID singleton - set once at startup
static PROCESS_ID: OnceLock<ProcessId> = OnceLock::new();

/// Process identifier for any component in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessId {
    /// Command line pipeline runner
    Orchestrator,
    /// HTTP API process
    WebServer,
}

impl ProcessId {
    /// Initialize the global process ID for the orchestrator CLI
    pub fn init_orchestrator() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }

    /// Initialize the global process ID for the webserver
    pub fn init_webserver() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::WebServer)
    }

    /// Get the global process ID.
    ///
    /// Library callers that never ran an `init_*` function (tests, embedding
    /// applications) are reported as the orchestrator.
    pub fn current() -> &'static ProcessId {
        PROCESS_ID.get_or_init(|| ProcessId::Orchestrator)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessId::Orchestrator => write!(f, "orchestrator"),
            ProcessId::WebServer => write!(f, "webserver"),
        }
    }
}
