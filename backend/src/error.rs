//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maternal_diet_shared::{ErrorResponse, InputError};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Message returned for every 500, whatever the cause
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Service not ready: {0}")]
    NotReady(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Validation(msg) => {
                debug!(reason = %msg, "Rejected request");
                metrics::counter!("diet_validation_failures_total").increment(1);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
            }
            ApiError::NotReady(msg) => {
                warn!(reason = %msg, "Request received before service was ready");
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_READY", msg)
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
