//! Test fixtures and data for orchestrator tests
//!
//! This module provides consistent test data and fixtures used across all test suites.

use shared::{
    DepartmentHistoricalData, OptimizationConstraints, OptimizationRequest, ScenarioRequest, ScenarioVariant,
};
use std::collections::HashMap;

/// Standard test data and fixtures
pub struct TestFixtures;

#[allow(dead_code)]
impl TestFixtures {
    pub const DEFAULT_BUDGET: f64 = 100.0;
    pub const DEFAULT_HORIZON: usize = 2;

    /// A trending up, B flat
    pub fn trending_and_flat() -> Vec<DepartmentHistoricalData> {
        vec![
            DepartmentHistoricalData::from_values("A", &[10.0, 20.0, 30.0]),
            DepartmentHistoricalData::from_values("B", &[5.0, 5.0, 5.0]),
        ]
    }

    /// Four departments with mixed trends
    pub fn mixed_departments() -> Vec<DepartmentHistoricalData> {
        vec![
            DepartmentHistoricalData::from_values("Engineering", &[120.0, 135.0, 150.0, 170.0]),
            DepartmentHistoricalData::from_values("Marketing", &[80.0, 95.0, 90.0, 110.0]),
            DepartmentHistoricalData::from_values("Support", &[60.0, 55.0, 50.0, 45.0]),
            DepartmentHistoricalData::from_values("Research", &[]),
        ]
    }

    pub fn simple_request() -> OptimizationRequest {
        OptimizationRequest::new(
            Self::trending_and_flat(),
            OptimizationConstraints::with_budget(Self::DEFAULT_BUDGET),
        )
        .with_forecast_periods(Self::DEFAULT_HORIZON)
    }

    pub fn constrained_request() -> OptimizationRequest {
        let mut constraints = OptimizationConstraints::with_budget(1_000.0);
        constraints.min_allocation_per_department = Some(HashMap::from([
            ("Support".to_string(), 100.0),
            ("Research".to_string(), 50.0),
        ]));
        constraints.max_allocation_per_department = Some(HashMap::from([
            ("Engineering".to_string(), 400.0),
            ("Marketing".to_string(), 300.0),
        ]));
        OptimizationRequest::new(Self::mixed_departments(), constraints).with_forecast_periods(4)
    }

    pub fn scenario_request() -> ScenarioRequest {
        let mut tight = ScenarioVariant::scaled("tight", 0.5);
        tight.max_allocation_per_department_override = Some(HashMap::from([("Engineering".to_string(), 100.0)]));
        let mut long_view = ScenarioVariant::scaled("long_view", 1.0);
        long_view.forecast_periods_override = Some(12);

        ScenarioRequest {
            base_request: Self::constrained_request(),
            variants: vec![ScenarioVariant::scaled("baseline", 1.0), tight, long_view],
        }
    }

    /// Request body in the JSON shape accepted by the API
    pub fn request_json() -> &'static str {
        r#"{
            "historical_financials": [
                {"department": "A", "series": [
                    {"period": "2024-Q1", "value": 10},
                    {"period": "2024-Q2", "value": 20},
                    {"period": "2024-Q3", "value": 30}
                ]},
                {"department": "B", "series": [
                    {"period": "2024-Q1", "value": 5},
                    {"period": "2024-Q2", "value": 5},
                    {"period": "2024-Q3", "value": 5}
                ]}
            ],
            "human_resources": [{"department": "A", "headcount": 12, "utilization_rate": 0.8}],
            "constraints": {"total_budget": 100},
            "config": {"objective": "maximize_impact", "forecast_periods": 2}
        }"#
    }
}
