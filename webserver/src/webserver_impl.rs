//! Main webserver implementation
//!
//! Builds the axum router over an injected [`WebServerState`] and serves it.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use shared::{logging, process_info, ProcessId};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{data, optimize, system};

/// Main webserver struct with dependency injection
#[derive(Clone)]
pub struct WebServer {
    state: WebServerState,
}

impl WebServer {
    pub fn new(state: WebServerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WebServerState {
        &self.state
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(system::root))
            .route("/health", get(system::health_check))
            .route("/docs", get(system::docs))
            // Optimization routes
            .route("/optimize/direct", post(optimize::direct_optimize))
            .route("/optimize/agent", post(optimize::agent_optimize))
            .route("/optimize/scenarios", post(optimize::scenarios))
            // Data staging routes
            .route("/data/ingest", post(data::ingest))
            .route("/data/historical", get(data::get_historical))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            logging::log_error(ProcessId::current(), "Binding listener", &e);
            WebServerError::ServerStartupFailed {
                address: addr.to_string(),
            }
        })?;
        process_info!(ProcessId::current(), "🌐 Listening on http://{}", addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
