//! Application Error Types
//!
//! Request-level error taxonomy with HTTP status mapping. Every handler
//! failure is converted here into a status code plus a human-readable JSON
//! body; nothing is allowed to crash the process.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with their HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or empty required field (400).
    #[error("{0}")]
    Validation(String),

    /// Duplicate email on signup (409).
    #[error("{0}")]
    Conflict(String),

    /// Login failure. Unknown email and wrong password deliberately share
    /// this variant and its message (401).
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer credential supplied (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Credential supplied but invalid or expired (403).
    #[error("{0}")]
    Forbidden(String),

    /// Record absent or owned by another user; the two cases are
    /// indistinguishable on purpose (404).
    #[error("{0}")]
    NotFound(String),

    /// Storage or other unexpected failure (500). The response body stays
    /// generic; the full error chain is logged server-side.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Body extraction failures (missing or unknown fields, wrong types,
/// malformed JSON) count as validation errors. Handlers take
/// `Result<Json<T>, JsonRejection>` and lift the rejection with `?`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
