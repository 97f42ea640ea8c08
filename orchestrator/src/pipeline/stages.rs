//! Stage functions operating on [`PipelineState`]

use crate::core::{estimate_future_impact, AllocatorSettings, PipelineState};
use crate::error::{OrchestratorError, OrchestratorResult};
use shared::{DepartmentAllocation, OptimizationResult};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Floor applied to every impact score before it is used as an allocation weight
pub const DEFAULT_IMPACT_FLOOR: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Prepare,
    Forecast,
    Optimize,
    Report,
}

impl PipelineStage {
    /// All stages in execution order
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Prepare,
        PipelineStage::Forecast,
        PipelineStage::Optimize,
        PipelineStage::Report,
    ];

    pub fn next(self) -> Option<PipelineStage> {
        match self {
            PipelineStage::Prepare => Some(PipelineStage::Forecast),
            PipelineStage::Forecast => Some(PipelineStage::Optimize),
            PipelineStage::Optimize => Some(PipelineStage::Report),
            PipelineStage::Report => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PipelineStage::Prepare => "prepare",
            PipelineStage::Forecast => "forecast",
            PipelineStage::Optimize => "optimize",
            PipelineStage::Report => "report",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings shared by every executor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineSettings {
    pub allocator: AllocatorSettings,
    pub impact_floor: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            allocator: AllocatorSettings::default(),
            impact_floor: DEFAULT_IMPACT_FLOOR,
        }
    }
}

/// Run one stage, rejecting it unless it directly follows the last completed stage
pub fn run_stage(
    stage: PipelineStage,
    state: PipelineState,
    settings: &PipelineSettings,
) -> OrchestratorResult<PipelineState> {
    if state.next_stage() != Some(stage) {
        return Err(OrchestratorError::StageOutOfOrder {
            stage,
            last_completed: state
                .last_completed
                .map(|s| s.name().to_string())
                .unwrap_or_else(|| "none".to_string()),
        });
    }

    let mut state = match stage {
        PipelineStage::Prepare => prepare(state),
        PipelineStage::Forecast => forecast(state, settings),
        PipelineStage::Optimize => optimize(state, settings),
        PipelineStage::Report => report(state),
    };
    state.last_completed = Some(stage);
    Ok(state)
}

/// Department list in input order; a repeated name keeps its first position
fn prepare(mut state: PipelineState) -> PipelineState {
    let mut seen = HashSet::new();
    state.departments = state
        .request
        .historical_financials
        .iter()
        .filter(|h| seen.insert(h.department.as_str()))
        .map(|h| h.department.clone())
        .collect();
    debug!(departments = state.departments.len(), "prepare complete");
    state
}

/// Impact score per department from its forecast horizon; first series wins on duplicates
fn forecast(mut state: PipelineState, settings: &PipelineSettings) -> PipelineState {
    let horizon = state.request.config.forecast_periods;
    for history in &state.request.historical_financials {
        if state.impact_per_unit.contains_key(&history.department) {
            continue;
        }
        let impact = estimate_future_impact(&history.values(), horizon);
        state
            .impact_per_unit
            .insert(history.department.clone(), impact.max(settings.impact_floor));
    }
    debug!(horizon, scored = state.impact_per_unit.len(), "forecast complete");
    state
}

fn optimize(mut state: PipelineState, settings: &PipelineSettings) -> PipelineState {
    let constraints = &state.request.constraints;
    state.allocations = settings.allocator.allocate(
        &state.departments,
        &state.impact_per_unit,
        constraints.total_budget,
        constraints.min_allocation_per_department.as_ref(),
        constraints.max_allocation_per_department.as_ref(),
    );
    debug!(
        budget = constraints.total_budget,
        allocated = state.allocations.total(),
        termination = ?state.allocations.termination(),
        "optimize complete"
    );
    state
}

fn report(mut state: PipelineState) -> PipelineState {
    let allocations: Vec<DepartmentAllocation> = state
        .allocations
        .iter()
        .map(|(department, allocation)| {
            let score = state.impact_per_unit.get(department).copied().unwrap_or(0.0);
            DepartmentAllocation {
                department: department.to_string(),
                allocation,
                expected_impact: allocation * score,
            }
        })
        .collect();
    let total_expected_impact = allocations.iter().map(|a| a.expected_impact).sum();

    state.result = Some(OptimizationResult {
        allocations,
        total_expected_impact,
        notes: state.note.clone(),
    });
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{DepartmentHistoricalData, OptimizationConstraints, OptimizationRequest};

    fn request() -> OptimizationRequest {
        OptimizationRequest::new(
            vec![
                DepartmentHistoricalData::from_values("Growth", &[10.0, 20.0, 30.0]),
                DepartmentHistoricalData::from_values("Legacy", &[30.0, 20.0, 10.0]),
            ],
            OptimizationConstraints::with_budget(100.0),
        )
        .with_forecast_periods(2)
    }

    fn run_all(state: PipelineState) -> PipelineState {
        let settings = PipelineSettings::default();
        PipelineStage::ALL
            .iter()
            .try_fold(state, |state, stage| run_stage(*stage, state, &settings))
            .unwrap()
    }

    #[test]
    fn test_stage_order() {
        assert_eq!(PipelineStage::Prepare.next(), Some(PipelineStage::Forecast));
        assert_eq!(PipelineStage::Report.next(), None);
        assert_eq!(PipelineStage::Optimize.to_string(), "optimize");
    }

    #[test]
    fn test_prepare_keeps_input_order() {
        let state = run_stage(PipelineStage::Prepare, PipelineState::new(request()), &PipelineSettings::default()).unwrap();
        assert_eq!(state.departments, vec!["Growth".to_string(), "Legacy".to_string()]);
        assert_eq!(state.last_completed, Some(PipelineStage::Prepare));
    }

    #[test]
    fn test_forecast_floors_scores() {
        let settings = PipelineSettings::default();
        let state = run_stage(PipelineStage::Prepare, PipelineState::new(request()), &settings).unwrap();
        let state = run_stage(PipelineStage::Forecast, state, &settings).unwrap();

        assert!((state.impact_per_unit["Growth"] - 90.0).abs() < 1e-9);
        // declining trend projects to zero and is floored
        assert_eq!(state.impact_per_unit["Legacy"], DEFAULT_IMPACT_FLOOR);
    }

    #[test]
    fn test_out_of_order_stage_rejected() {
        let result = run_stage(PipelineStage::Optimize, PipelineState::new(request()), &PipelineSettings::default());
        assert!(matches!(
            result,
            Err(OrchestratorError::StageOutOfOrder {
                stage: PipelineStage::Optimize,
                ..
            })
        ));
    }

    #[test]
    fn test_rerunning_stage_rejected() {
        let settings = PipelineSettings::default();
        let state = run_stage(PipelineStage::Prepare, PipelineState::new(request()), &settings).unwrap();
        assert!(run_stage(PipelineStage::Prepare, state, &settings).is_err());
    }

    #[test]
    fn test_report_joins_allocation_and_score() {
        let state = run_all(PipelineState::new(request()).with_note("unit"));
        let result = state.into_result().unwrap();

        assert_eq!(result.notes.as_deref(), Some("unit"));
        assert_eq!(result.allocations.len(), 2);
        let expected: f64 = result
            .allocations
            .iter()
            .map(|a| a.expected_impact)
            .sum();
        assert_eq!(result.total_expected_impact, expected);
        assert!((result.allocation_for("Growth").unwrap() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_duplicate_department_uses_first_series() {
        let mut req = request();
        req.historical_financials
            .push(DepartmentHistoricalData::from_values("Growth", &[1000.0, 1000.0]));
        let state = run_all(PipelineState::new(req));

        assert_eq!(state.departments.len(), 2);
        assert!((state.impact_per_unit["Growth"] - 90.0).abs() < 1e-9);
    }
}
