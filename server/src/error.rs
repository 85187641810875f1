//! Route-boundary error type and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use dagri_auth::AuthError;
use dagri_store::StoreError;
use serde_json::json;
use tracing::error;

/// Errors a handler can return. Each variant maps to one status code; the
/// body is always JSON `{"message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input → 400.
    Validation(String),
    /// Absent/invalid/expired token or bad credentials → 401.
    Auth(String),
    /// Missing resource → 404.
    NotFound(String),
    /// Duplicate unique field or dangling reference → 409.
    Conflict(String),
    /// Anything unexpected → 500 with a generic message.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => (StatusCode::CONFLICT, msg),
            Self::Internal(detail) => {
                // The detail stays in the log; clients get a generic message.
                error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Database(_) | StoreError::InvalidData(_) => Self::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            // Hash/key/serde trouble is ours, not the client's.
            AuthError::Hash(_) | AuthError::InvalidKey(_) | AuthError::Serialization(_) => {
                Self::Internal(e.to_string())
            }
            _ => Self::Auth("Invalid or expired token".to_string()),
        }
    }
}
