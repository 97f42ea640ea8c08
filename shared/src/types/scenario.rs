//! Scenario planning types

use super::optimization::{OptimizationRequest, OptimizationResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named override bundle applied to a base request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioVariant {
    pub name: String,
    #[serde(default = "default_multiplier")]
    pub budget_multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_periods_override: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_allocation_per_department_override: Option<HashMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_allocation_per_department_override: Option<HashMap<String, f64>>,
}

fn default_multiplier() -> f64 {
    1.0
}

impl ScenarioVariant {
    /// Variant that only scales the budget
    pub fn scaled(name: impl Into<String>, budget_multiplier: f64) -> Self {
        Self {
            name: name.into(),
            budget_multiplier,
            forecast_periods_override: None,
            min_allocation_per_department_override: None,
            max_allocation_per_department_override: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    pub base_request: OptimizationRequest,
    pub variants: Vec<ScenarioVariant>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub result: OptimizationResult,
}
