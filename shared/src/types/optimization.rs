//! Optimization request and result types

use super::resources::{DepartmentHistoricalData, HumanResourceData, PhysicalResourceData};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of future periods to forecast
pub const DEFAULT_FORECAST_PERIODS: usize = 4;

/// Longest forecast horizon accepted from callers
pub const MAX_FORECAST_PERIODS: usize = 1_000;

/// Optimization objective. Only impact maximization is supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    #[default]
    MaximizeImpact,
}

/// Budget and per-department floor/ceiling constraints
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    pub total_budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_allocation_per_department: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allocation_per_department: Option<HashMap<String, f64>>,
}

impl OptimizationConstraints {
    /// Constraints with a budget and no floors or caps
    pub fn with_budget(total_budget: f64) -> Self {
        Self {
            total_budget,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConfig {
    #[serde(default)]
    pub objective: Objective,
    #[serde(default = "default_forecast_periods")]
    pub forecast_periods: usize,
}

fn default_forecast_periods() -> usize {
    DEFAULT_FORECAST_PERIODS
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            forecast_periods: DEFAULT_FORECAST_PERIODS,
        }
    }
}

/// A complete, request-scoped optimization input
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub historical_financials: Vec<DepartmentHistoricalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_resources: Option<Vec<HumanResourceData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resources: Option<Vec<PhysicalResourceData>>,
    pub constraints: OptimizationConstraints,
    #[serde(default)]
    pub config: OptimizationConfig,
}

impl OptimizationRequest {
    /// Request over the given departments with default config and no resource data
    pub fn new(historical_financials: Vec<DepartmentHistoricalData>, constraints: OptimizationConstraints) -> Self {
        Self {
            historical_financials,
            human_resources: None,
            physical_resources: None,
            constraints,
            config: OptimizationConfig::default(),
        }
    }

    pub fn with_forecast_periods(mut self, forecast_periods: usize) -> Self {
        self.config.forecast_periods = forecast_periods;
        self
    }
}

/// Budget assigned to one department and the impact it is expected to yield
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAllocation {
    pub department: String,
    pub allocation: f64,
    pub expected_impact: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub allocations: Vec<DepartmentAllocation>,
    pub total_expected_impact: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OptimizationResult {
    /// Allocation for a department, if it took part in the run
    pub fn allocation_for(&self, department: &str) -> Option<f64> {
        self.allocations
            .iter()
            .find(|a| a.department == department)
            .map(|a| a.allocation)
    }

    /// Sum of all allocations
    pub fn total_allocated(&self) -> f64 {
        self.allocations.iter().map(|a| a.allocation).sum()
    }
}
