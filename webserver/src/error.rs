//! WebServer-specific error types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use orchestrator::OrchestratorError;
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("HTTP server startup failed on {address}")]
    ServerStartupFailed { address: String },

    #[error("Invalid request: {0}")]
    Validation(#[from] SharedError),

    #[error("Malformed request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Orchestrator error: {0}")]
    Orchestrator(#[from] OrchestratorError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Validation(_) | WebServerError::Orchestrator(OrchestratorError::Validation(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            WebServerError::InvalidBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
