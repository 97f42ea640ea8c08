//! Core business logic modules
//!
//! This module contains pure business logic with no I/O dependencies.
//! All functions are deterministic and easily testable.

pub mod allocation;
pub mod forecasting;
pub mod state;

pub use allocation::{allocate_budget, AllocatorSettings, BudgetAllocation};
pub use forecasting::{estimate_future_impact, forecast, forecast_series, LinearTrend};
pub use state::PipelineState;
