//! Error types for the weather API
//!
//! Provides unified error handling using thiserror. The cache layer has
//! no error taxonomy of its own; everything here originates in request
//! validation or the persistence layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == API Error Enum ==
/// Unified error type for the weather API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request or missing required field
    #[error("{0}")]
    Validation(String),

    /// No record for the requested id
    #[error("{0} not found")]
    NotFound(String),

    /// Underlying document store operation failed
    #[error("Persistence error: {0}")]
    Persistence(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Persistence(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PERSISTENCE_ERROR"),
        };

        let body = Json(json!({
            "status": "error",
            "error": code,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather API.
pub type Result<T> = std::result::Result<T, ApiError>;
