//! Main entry point for the orchestrator binary
//!
//! Reads an optimization or scenario request from a JSON file, runs it
//! through the pipeline and prints the JSON result to stdout.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use orchestrator::{
    run_scenarios, run_scenarios_concurrent, GraphExecutor, OrchestratorError, OrchestratorResult, PipelineExecutor,
    SequentialExecutor,
};
use shared::{
    logging, process_debug, process_error, process_info, process_warn, OptimizationRequest, ProcessId, ScenarioRequest,
    Validate,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExecutorKind {
    /// Run stages as direct calls
    Sequential,
    /// Walk the declared stage graph
    Graph,
}

/// Forecast-driven budget allocation over a JSON request
#[derive(Parser)]
#[command(name = "orchestrator")]
#[command(about = "Allocates a budget across departments from their historical performance")]
pub struct Args {
    /// Path to the request JSON file
    #[arg(long)]
    pub request: PathBuf,

    /// Treat the file as a scenario request (base request + variants)
    #[arg(long)]
    pub scenarios: bool,

    /// Pipeline executor to use
    #[arg(long, value_enum, default_value = "sequential")]
    pub executor: ExecutorKind,

    /// Run scenario variants concurrently (requires --scenarios)
    #[arg(long)]
    pub concurrent: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() -> OrchestratorResult<()> {
    let _ = dotenv::dotenv();
    let args = Args::parse();

    ProcessId::init_orchestrator();
    logging::init_tracing_with_level(Some(&args.log_level));

    if args.concurrent && !args.scenarios {
        return Err(OrchestratorError::config("--concurrent only applies with --scenarios"));
    }

    let executor: Box<dyn PipelineExecutor> = match args.executor {
        ExecutorKind::Sequential => Box::new(SequentialExecutor::new()),
        ExecutorKind::Graph => Box::new(GraphExecutor::new()),
    };
    logging::log_startup(ProcessId::current(), &format!("{} pipeline", executor.name()));

    let raw = tokio::fs::read_to_string(&args.request).await.inspect_err(|e| {
        process_error!(ProcessId::current(), path = %args.request.display(), "Cannot read request: {}", e);
    })?;

    let output = if args.scenarios {
        let request: ScenarioRequest = serde_json::from_str(&raw)?;
        request.validate()?;
        if request.variants.is_empty() {
            process_warn!(ProcessId::current(), "Scenario request has no variants");
        }
        process_debug!(ProcessId::current(), "Running {} scenario variants", request.variants.len());

        let results = if args.concurrent {
            run_scenarios_concurrent(executor.as_ref(), &request).await?
        } else {
            run_scenarios(executor.as_ref(), &request).await?
        };
        serde_json::to_string_pretty(&results)?
    } else {
        let request: OptimizationRequest = serde_json::from_str(&raw)?;
        request.validate()?;

        let result = executor.execute(request).await?;
        process_info!(
            ProcessId::current(),
            "Allocated {:.2} across {} departments, expected impact {:.2}",
            result.total_allocated(),
            result.allocations.len(),
            result.total_expected_impact
        );
        serde_json::to_string_pretty(&result)?
    };

    println!("{output}");
    logging::log_success(ProcessId::current(), "Pipeline completed");
    Ok(())
}
