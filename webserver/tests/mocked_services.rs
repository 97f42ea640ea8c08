//! Handler tests against mocked store and executors

mod helpers;

use axum::http::StatusCode;
use helpers::send;
use orchestrator::pipeline::MockPipelineExecutor;
use orchestrator::traits::MockHistoricalStore;
use orchestrator::{OrchestratorError, HISTORICAL_FINANCIALS_KEY};
use serde_json::json;
use shared::{DepartmentAllocation, OptimizationResult};
use std::sync::Arc;
use webserver::{WebServer, WebServerState};

fn unused_executor() -> MockPipelineExecutor {
    let mut executor = MockPipelineExecutor::new();
    executor.expect_execute().never();
    executor.expect_name().return_const("unused");
    executor
}

#[tokio::test]
async fn test_ingest_writes_under_historical_key() {
    let mut store = MockHistoricalStore::new();
    store
        .expect_set()
        .withf(|key, value| key == HISTORICAL_FINANCIALS_KEY && value.len() == 1)
        .times(1)
        .returning(|_, _| Ok(()));

    let state = WebServerState::new(Arc::new(store), Arc::new(unused_executor()), Arc::new(unused_executor()));
    let router = WebServer::new(state).build_router();

    let body = json!([{"department": "Ops", "series": [{"period": "p1", "value": 1.0}]}]);
    let (status, response) = send(&router, "POST", "/data/ingest", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["departments"], json!(["Ops"]));
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let mut store = MockHistoricalStore::new();
    store
        .expect_get()
        .returning(|_| Err(OrchestratorError::config("store offline")));

    let state = WebServerState::new(Arc::new(store), Arc::new(unused_executor()), Arc::new(unused_executor()));
    let router = WebServer::new(state).build_router();

    let (status, body) = send(&router, "GET", "/data/historical", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("store offline"));
}

#[tokio::test]
async fn test_direct_route_uses_direct_executor() {
    let mut direct = MockPipelineExecutor::new();
    direct.expect_name().return_const("direct");
    direct.expect_execute().times(1).returning(|request| {
        Ok(OptimizationResult {
            allocations: vec![DepartmentAllocation {
                department: "Ops".to_string(),
                allocation: request.constraints.total_budget,
                expected_impact: 0.0,
            }],
            total_expected_impact: 0.0,
            notes: Some("mocked".to_string()),
        })
    });

    let state = WebServerState::new(
        Arc::new(MockHistoricalStore::new()),
        Arc::new(direct),
        Arc::new(unused_executor()),
    );
    let router = WebServer::new(state).build_router();

    let body = json!({
        "historical_financials": [{"department": "Ops", "series": []}],
        "constraints": {"total_budget": 42.0}
    });
    let (status, response) = send(&router, "POST", "/optimize/direct", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["notes"], "mocked");
    assert_eq!(response["allocations"][0]["allocation"], 42.0);
}
