// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::api::format::ResponseEnvelope;

/// HTTP API error mapped to the uniform `{data, error}` envelope.
///
/// The CRUD contract deliberately collapses every failure kind to a single
/// 400 response: validation, unknown-id and storage errors all surface as
/// `{data: null, error: "<message>"}`. Only the authentication boundary in
/// front of the resource answers 401.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),
    NotFound(String),
    Internal(String),

    // 401 Unauthorized
    Unauthorized(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Internal(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
        }
    }

    /// Convert to the failure envelope body
    pub fn to_envelope(&self) -> ResponseEnvelope {
        ResponseEnvelope::error(self.message())
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }
}

// Convert service errors to ApiError at the request boundary
impl From<crate::services::TodoError> for ApiError {
    fn from(err: crate::services::TodoError) -> Self {
        match err {
            crate::services::TodoError::Validation(msg) => ApiError::validation(msg),
            crate::services::TodoError::NotFound(msg) => ApiError::not_found(msg),
            crate::services::TodoError::Database(db_err) => {
                // Log the full storage error, report the message in the envelope
                tracing::error!("storage error: {}", db_err);
                ApiError::internal(db_err.to_string())
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_envelope())).into_response()
    }
}
