//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use wuqumo_core::error::WuqumoError;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with a plain-text body.
    ///
    /// Existing consumers match on the exact message text, so lookup
    /// misses are rendered verbatim rather than wrapped in JSON.
    NotFound(String),
    /// 500 with a JSON error envelope.
    Internal(String),
}

impl ApiError {
    /// Not found error with the given plain-text body.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Error response body for non-404 errors.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message).into_response(),
            ApiError::Internal(message) => {
                let body = ErrorResponse {
                    error: ErrorBody {
                        code: "INTERNAL_ERROR".into(),
                        message,
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<WuqumoError> for ApiError {
    fn from(err: WuqumoError) -> Self {
        match err {
            WuqumoError::LcpNotFound(id) => {
                ApiError::not_found(format!("LCP ID {} not found!", id))
            }
            WuqumoError::WuqumoNotFound(id) => {
                ApiError::not_found(format!("Wuqumo ID {} not found!", id))
            }
            other => {
                tracing::error!(error = %other, "Internal error");
                ApiError::internal("An internal error occurred")
            }
        }
    }
}
