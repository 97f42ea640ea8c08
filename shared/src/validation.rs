//! Request validation performed at the API boundary
//!
//! The forecasting and allocation core assumes well-formed input and never fails.
//! Everything that would make a request malformed is rejected here instead.

use crate::errors::{SharedError, SharedResult};
use crate::types::{
    DepartmentHistoricalData, OptimizationConstraints, OptimizationRequest, ScenarioRequest, MAX_FORECAST_PERIODS,
};
use std::collections::{HashMap, HashSet};

/// Types that can check their own shape and ranges before entering the pipeline
pub trait Validate {
    fn validate(&self) -> SharedResult<()>;
}

impl Validate for [DepartmentHistoricalData] {
    fn validate(&self) -> SharedResult<()> {
        let mut seen = HashSet::new();
        for (i, dept) in self.iter().enumerate() {
            if !seen.insert(dept.department.as_str()) {
                return Err(SharedError::DuplicateDepartment {
                    department: dept.department.clone(),
                });
            }
            for (j, point) in dept.series.iter().enumerate() {
                ensure_finite(point.value, || format!("historical_financials[{i}].series[{j}].value"))?;
            }
        }
        Ok(())
    }
}

impl Validate for OptimizationRequest {
    fn validate(&self) -> SharedResult<()> {
        self.historical_financials.as_slice().validate()?;
        ensure_horizon(self.config.forecast_periods, || "config.forecast_periods".to_string())?;

        for (i, hr) in self.human_resources.iter().flatten().enumerate() {
            ensure_unit_interval(hr.utilization_rate, || format!("human_resources[{i}].utilization_rate"))?;
        }
        for (i, pr) in self.physical_resources.iter().flatten().enumerate() {
            ensure_finite(pr.quantity, || format!("physical_resources[{i}].quantity"))?;
            ensure_unit_interval(pr.utilization_rate, || format!("physical_resources[{i}].utilization_rate"))?;
        }

        self.constraints.validate()
    }
}

impl Validate for OptimizationConstraints {
    fn validate(&self) -> SharedResult<()> {
        ensure_finite(self.total_budget, || "constraints.total_budget".to_string())?;
        validate_bounds(
            self.min_allocation_per_department.as_ref(),
            self.max_allocation_per_department.as_ref(),
            "constraints",
        )
    }
}

impl Validate for ScenarioRequest {
    fn validate(&self) -> SharedResult<()> {
        self.base_request.validate()?;

        let mut names = HashSet::new();
        for variant in &self.variants {
            if !names.insert(variant.name.as_str()) {
                return Err(SharedError::DuplicateVariant {
                    name: variant.name.clone(),
                });
            }
            ensure_finite(variant.budget_multiplier, || {
                format!("variants[{}].budget_multiplier", variant.name)
            })?;
            if let Some(periods) = variant.forecast_periods_override {
                ensure_horizon(periods, || format!("variants[{}].forecast_periods_override", variant.name))?;
            }

            // Overrides replace the base maps wholesale; an empty map counts as absent
            let base = &self.base_request.constraints;
            let min = variant
                .min_allocation_per_department_override
                .as_ref()
                .filter(|m| !m.is_empty())
                .or(base.min_allocation_per_department.as_ref());
            let max = variant
                .max_allocation_per_department_override
                .as_ref()
                .filter(|m| !m.is_empty())
                .or(base.max_allocation_per_department.as_ref());
            validate_bounds(min, max, &format!("variants[{}]", variant.name))?;
        }
        Ok(())
    }
}

fn validate_bounds(
    min: Option<&HashMap<String, f64>>,
    max: Option<&HashMap<String, f64>>,
    context: &str,
) -> SharedResult<()> {
    for (dept, value) in min.into_iter().flatten() {
        ensure_finite(*value, || format!("{context}.min_allocation_per_department.{dept}"))?;
    }
    for (dept, value) in max.into_iter().flatten() {
        ensure_finite(*value, || format!("{context}.max_allocation_per_department.{dept}"))?;
    }

    if let (Some(min), Some(max)) = (min, max) {
        for (dept, lo) in min {
            if let Some(hi) = max.get(dept) {
                if lo > hi {
                    return Err(SharedError::InvalidConstraint {
                        department: dept.clone(),
                        min: *lo,
                        max: *hi,
                    });
                }
            }
        }
    }
    Ok(())
}

fn ensure_finite(value: f64, field: impl FnOnce() -> String) -> SharedResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SharedError::NonFinite { field: field() })
    }
}

fn ensure_horizon(periods: usize, field: impl FnOnce() -> String) -> SharedResult<()> {
    if periods <= MAX_FORECAST_PERIODS {
        Ok(())
    } else {
        Err(SharedError::OutOfRange {
            field: field(),
            value: periods as f64,
            expected: format!("0..={MAX_FORECAST_PERIODS}"),
        })
    }
}

fn ensure_unit_interval(value: f64, field: impl FnOnce() -> String) -> SharedResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SharedError::OutOfRange {
            field: field(),
            value,
            expected: "0.0..=1.0".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HumanResourceData, ScenarioVariant};

    fn request() -> OptimizationRequest {
        OptimizationRequest::new(
            vec![
                DepartmentHistoricalData::from_values("Marketing", &[10.0, 20.0, 30.0]),
                DepartmentHistoricalData::from_values("Support", &[5.0, 5.0, 5.0]),
            ],
            OptimizationConstraints::with_budget(100.0),
        )
    }

    #[test]
    fn test_valid_request_passes() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_department_rejected() {
        let mut req = request();
        req.historical_financials
            .push(DepartmentHistoricalData::from_values("Support", &[1.0]));

        assert_eq!(
            req.validate(),
            Err(SharedError::DuplicateDepartment {
                department: "Support".to_string()
            })
        );
    }

    #[test]
    fn test_utilization_out_of_range_rejected() {
        let mut req = request();
        req.human_resources = Some(vec![HumanResourceData {
            department: "Support".to_string(),
            headcount: 4,
            utilization_rate: 1.5,
        }]);

        assert!(matches!(req.validate(), Err(SharedError::OutOfRange { .. })));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let mut req = request();
        req.constraints.min_allocation_per_department = Some(HashMap::from([("Marketing".to_string(), 50.0)]));
        req.constraints.max_allocation_per_department = Some(HashMap::from([("Marketing".to_string(), 20.0)]));

        assert!(matches!(req.validate(), Err(SharedError::InvalidConstraint { .. })));
    }

    #[test]
    fn test_non_finite_budget_rejected() {
        let mut req = request();
        req.constraints.total_budget = f64::NAN;

        assert!(matches!(req.validate(), Err(SharedError::NonFinite { .. })));
    }

    #[test]
    fn test_scenario_override_checked_against_base_caps() {
        let mut base = request();
        base.constraints.max_allocation_per_department = Some(HashMap::from([("Support".to_string(), 10.0)]));
        let mut variant = ScenarioVariant::scaled("floor", 1.0);
        variant.min_allocation_per_department_override = Some(HashMap::from([("Support".to_string(), 40.0)]));

        let scenarios = ScenarioRequest {
            base_request: base,
            variants: vec![variant],
        };
        assert!(matches!(scenarios.validate(), Err(SharedError::InvalidConstraint { .. })));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let req = request().with_forecast_periods(usize::MAX);
        assert!(matches!(req.validate(), Err(SharedError::OutOfRange { .. })));

        let at_limit = request().with_forecast_periods(MAX_FORECAST_PERIODS);
        assert_eq!(at_limit.validate(), Ok(()));
    }

    #[test]
    fn test_oversized_horizon_override_rejected() {
        let mut variant = ScenarioVariant::scaled("far", 1.0);
        variant.forecast_periods_override = Some(MAX_FORECAST_PERIODS + 1);

        let scenarios = ScenarioRequest {
            base_request: request(),
            variants: vec![variant],
        };
        assert!(matches!(scenarios.validate(), Err(SharedError::OutOfRange { .. })));
    }

    #[test]
    fn test_empty_override_checked_against_base_floors() {
        let mut base = request();
        base.constraints.min_allocation_per_department = Some(HashMap::from([("Support".to_string(), 40.0)]));
        let mut variant = ScenarioVariant::scaled("caps", 1.0);
        variant.min_allocation_per_department_override = Some(HashMap::new());
        variant.max_allocation_per_department_override = Some(HashMap::from([("Support".to_string(), 10.0)]));

        let scenarios = ScenarioRequest {
            base_request: base,
            variants: vec![variant],
        };
        assert!(matches!(scenarios.validate(), Err(SharedError::InvalidConstraint { .. })));
    }

    #[test]
    fn test_duplicate_variant_names_rejected() {
        let scenarios = ScenarioRequest {
            base_request: request(),
            variants: vec![ScenarioVariant::scaled("x", 1.0), ScenarioVariant::scaled("x", 2.0)],
        };
        assert!(matches!(scenarios.validate(), Err(SharedError::DuplicateVariant { .. })));
    }
}
