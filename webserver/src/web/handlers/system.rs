//! Health and service information endpoints

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::WebServerState;

/// GET /health
pub async fn health_check(State(state): State<WebServerState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.get_uptime_seconds(),
        "server_time": Utc::now().timestamp(),
    }))
}

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Resource Optimizer API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs",
    }))
}

/// GET /docs
pub async fn docs() -> Json<Value> {
    Json(json!({
        "routes": [
            "GET /health",
            "POST /optimize/direct",
            "POST /optimize/agent",
            "POST /optimize/scenarios",
            "POST /data/ingest",
            "GET /data/historical",
        ],
    }))
}
