//! Error types for the compliance server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use estate_compliance::ComplianceError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Jurisdiction not found: {0}")]
    JurisdictionNotFound(String),

    #[error("Could not resolve jurisdiction: {0}")]
    JurisdictionUnresolved(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::JurisdictionNotFound(code) => (
                StatusCode::NOT_FOUND,
                "JURISDICTION_NOT_FOUND",
                format!("Unknown jurisdiction '{}'", code),
            ),
            ServerError::JurisdictionUnresolved(name) => (
                StatusCode::NOT_FOUND,
                "JURISDICTION_UNRESOLVED",
                format!("'{}' is not a supported US jurisdiction", name),
            ),
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
        };

        warn!("{} ({})", self, code);

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ComplianceError> for ServerError {
    fn from(err: ComplianceError) -> Self {
        match err {
            ComplianceError::NotFound { code } => ServerError::JurisdictionNotFound(code),
        }
    }
}
