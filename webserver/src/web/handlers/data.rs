//! Historical data staging endpoints

use axum::{extract::State, response::Json};
use orchestrator::HISTORICAL_FINANCIALS_KEY;
use serde_json::{json, Value};
use shared::{DepartmentHistoricalData, Validate};
use tracing::info;

use crate::error::WebServerResult;
use crate::web::extract::ApiJson;
use crate::state::WebServerState;

/// POST /data/ingest
pub async fn ingest(
    State(state): State<WebServerState>,
    ApiJson(historical): ApiJson<Vec<DepartmentHistoricalData>>,
) -> WebServerResult<Json<Value>> {
    historical.as_slice().validate()?;
    let departments: Vec<String> = historical.iter().map(|h| h.department.clone()).collect();

    state.store.set(HISTORICAL_FINANCIALS_KEY, historical).await?;
    info!(departments = departments.len(), "historical data stored");

    Ok(Json(json!({
        "status": "stored",
        "departments": departments,
    })))
}

/// GET /data/historical
pub async fn get_historical(State(state): State<WebServerState>) -> WebServerResult<Json<Value>> {
    let data = state
        .store
        .get(HISTORICAL_FINANCIALS_KEY)
        .await?
        .unwrap_or_default();
    Ok(Json(json!({ "historical_financials": data })))
}
