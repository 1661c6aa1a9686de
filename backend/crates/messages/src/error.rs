//! Message Error Types
//!
//! This module provides message-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Message-specific result type alias
pub type MessageResult<T> = Result<T, MessageError>;

/// Message-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status codes
/// and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Request body was not the expected JSON document
    #[error("Invalid JSON payload. Expected: {{\"content\": \"your message\"}}")]
    InvalidPayload,

    /// Content field missing or empty
    #[error("Content field is required")]
    EmptyContent,

    /// Listing messages failed
    #[error("Database query failed")]
    QueryFailed(#[source] sqlx::Error),

    /// Persisting a message failed
    #[error("Failed to insert message")]
    InsertFailed(#[source] sqlx::Error),
}

impl MessageError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MessageError::InvalidPayload | MessageError::EmptyContent => StatusCode::BAD_REQUEST,
            MessageError::QueryFailed(_) | MessageError::InsertFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MessageError::InvalidPayload | MessageError::EmptyContent => ErrorKind::BadRequest,
            MessageError::QueryFailed(_) | MessageError::InsertFailed(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MessageError::InvalidPayload => {
                tracing::warn!("Message request rejected: body is not the expected JSON");
            }
            MessageError::EmptyContent => {
                tracing::warn!("Message request rejected: empty content");
            }
            MessageError::QueryFailed(e) => {
                tracing::error!(error = %e, "Message listing query failed");
            }
            MessageError::InsertFailed(e) => {
                tracing::error!(error = %e, "Message insert failed");
            }
        }
    }
}

impl From<MessageError> for AppError {
    fn from(err: MessageError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
