//! Response envelope for the API
//!
//! Success bodies carry `{status, data, message}`; error bodies are
//! produced by `ApiError::into_response` with the matching shape.

use chrono::Utc;
use serde::Serialize;

// == Api Response ==
/// Standard success envelope wrapping a payload.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always "success" for this envelope
    pub status: String,
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps `data` in a success envelope.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            data,
            message: message.into(),
        }
    }
}

// == Health Response ==
/// Body for the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
