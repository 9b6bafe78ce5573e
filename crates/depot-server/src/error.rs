use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use depot_core::error::AppError;

/// API error type that maps to HTTP responses.
///
/// Client errors carry no body: `NoContent` renders as an empty 204 and
/// `BadRequest` as an empty 400. `Internal` renders a JSON [`ErrorResponse`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No content")]
    NoContent,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoContent => StatusCode::NO_CONTENT.into_response(),
            ApiError::BadRequest(msg) => {
                tracing::debug!(reason = %msg, "Rejecting request");
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::Internal(message) => {
                let body = Json(ErrorResponse {
                    error: "internal_error".to_string(),
                    message,
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::ItemNotFound(_) => ApiError::NoContent,
            AppError::Validation(msg) => ApiError::BadRequest(msg),
            AppError::DatabaseError(e) => {
                tracing::error!(error = %e, "Database error");
                ApiError::Internal("Database error".to_string())
            }
            AppError::Store(msg) => {
                tracing::error!(error = %msg, "Store error");
                ApiError::Internal("Store error".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
