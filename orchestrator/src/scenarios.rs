//! Scenario fan-out: derive one independent request per variant and run each

use crate::error::OrchestratorResult;
use crate::pipeline::PipelineExecutor;
use futures_util::future::join_all;
use shared::{
    OptimizationConfig, OptimizationConstraints, OptimizationRequest, ScenarioRequest, ScenarioResult,
    ScenarioVariant,
};
use tracing::info;

/// Apply a variant's overrides to the base request.
///
/// The budget is scaled by the multiplier. Min/max maps and the forecast
/// horizon are replaced wholesale when the variant overrides them and copied
/// from the base otherwise; maps are never merged. An empty override map
/// counts as no override.
pub fn derive_request(base: &OptimizationRequest, variant: &ScenarioVariant) -> OptimizationRequest {
    let constraints = OptimizationConstraints {
        total_budget: base.constraints.total_budget * variant.budget_multiplier,
        min_allocation_per_department: variant
            .min_allocation_per_department_override
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| base.constraints.min_allocation_per_department.clone()),
        max_allocation_per_department: variant
            .max_allocation_per_department_override
            .clone()
            .filter(|m| !m.is_empty())
            .or_else(|| base.constraints.max_allocation_per_department.clone()),
    };
    let config = OptimizationConfig {
        objective: base.config.objective,
        forecast_periods: variant
            .forecast_periods_override
            .unwrap_or(base.config.forecast_periods),
    };

    OptimizationRequest {
        historical_financials: base.historical_financials.clone(),
        human_resources: base.human_resources.clone(),
        physical_resources: base.physical_resources.clone(),
        constraints,
        config,
    }
}

/// Run every variant one after another, in declared order
pub async fn run_scenarios<E>(executor: &E, scenarios: &ScenarioRequest) -> OrchestratorResult<Vec<ScenarioResult>>
where
    E: PipelineExecutor + ?Sized,
{
    let mut results = Vec::with_capacity(scenarios.variants.len());
    for variant in &scenarios.variants {
        results.push(run_variant(executor, &scenarios.base_request, variant).await?);
    }
    Ok(results)
}

/// Run all variants concurrently; results keep the declared order
pub async fn run_scenarios_concurrent<E>(
    executor: &E,
    scenarios: &ScenarioRequest,
) -> OrchestratorResult<Vec<ScenarioResult>>
where
    E: PipelineExecutor + ?Sized,
{
    join_all(
        scenarios
            .variants
            .iter()
            .map(|variant| run_variant(executor, &scenarios.base_request, variant)),
    )
    .await
    .into_iter()
    .collect()
}

async fn run_variant<E>(
    executor: &E,
    base: &OptimizationRequest,
    variant: &ScenarioVariant,
) -> OrchestratorResult<ScenarioResult>
where
    E: PipelineExecutor + ?Sized,
{
    let request = derive_request(base, variant);
    info!(
        scenario = %variant.name,
        budget = request.constraints.total_budget,
        horizon = request.config.forecast_periods,
        executor = executor.name(),
        "running scenario"
    );
    let result = executor.execute(request).await?;
    Ok(ScenarioResult {
        name: variant.name.clone(),
        result,
    })
}
