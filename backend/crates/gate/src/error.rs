//! Gate Error Types
//!
//! This module provides gate-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Gate-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum GateError {
    /// Token bucket had no token for this request
    #[error("Rate limit exceeded. Too many requests.")]
    RateLimited,

    /// Request body was not valid JSON
    #[error("Invalid JSON payload")]
    InvalidPayload,

    /// Dependency probe did not answer within the timeout
    #[error("Database probe timed out")]
    ProbeTimeout,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GateError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GateError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GateError::InvalidPayload => StatusCode::BAD_REQUEST,
            GateError::ProbeTimeout => StatusCode::SERVICE_UNAVAILABLE,
            GateError::Database(_) | GateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GateError::RateLimited => ErrorKind::TooManyRequests,
            GateError::InvalidPayload => ErrorKind::BadRequest,
            GateError::ProbeTimeout => ErrorKind::ServiceUnavailable,
            GateError::Database(_) | GateError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GateError::RateLimited => {
                tracing::warn!("Request rejected: rate limit exceeded");
            }
            GateError::InvalidPayload => {
                tracing::warn!("Request rejected: body is not valid JSON");
            }
            GateError::ProbeTimeout => {
                tracing::error!("Database probe timed out");
            }
            GateError::Database(e) => {
                tracing::error!(error = %e, "Gate database error");
            }
            GateError::Internal(msg) => {
                tracing::error!(message = %msg, "Gate internal error");
            }
        }
    }
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
