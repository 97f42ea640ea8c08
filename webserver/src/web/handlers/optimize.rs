//! Optimization endpoints

use axum::{extract::State, response::Json};
use orchestrator::run_scenarios;
use shared::{OptimizationRequest, OptimizationResult, ScenarioRequest, ScenarioResult, Validate};
use tracing::info;

use crate::error::WebServerResult;
use crate::web::extract::ApiJson;
use crate::state::WebServerState;

/// POST /optimize/direct
pub async fn direct_optimize(
    State(state): State<WebServerState>,
    ApiJson(request): ApiJson<OptimizationRequest>,
) -> WebServerResult<Json<OptimizationResult>> {
    request.validate()?;
    info!(
        departments = request.historical_financials.len(),
        budget = request.constraints.total_budget,
        "direct optimization"
    );
    let result = state.direct_executor.execute(request).await?;
    Ok(Json(result))
}

/// POST /optimize/agent
pub async fn agent_optimize(
    State(state): State<WebServerState>,
    ApiJson(request): ApiJson<OptimizationRequest>,
) -> WebServerResult<Json<OptimizationResult>> {
    request.validate()?;
    info!(
        departments = request.historical_financials.len(),
        budget = request.constraints.total_budget,
        "agent optimization"
    );
    let result = state.agent_executor.execute(request).await?;
    Ok(Json(result))
}

/// POST /optimize/scenarios
pub async fn scenarios(
    State(state): State<WebServerState>,
    ApiJson(request): ApiJson<ScenarioRequest>,
) -> WebServerResult<Json<Vec<ScenarioResult>>> {
    request.validate()?;
    info!(variants = request.variants.len(), "scenario optimization");
    let results = run_scenarios(state.agent_executor.as_ref(), &request).await?;
    Ok(Json(results))
}
