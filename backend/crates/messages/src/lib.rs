//! Messages - Persisted Message Module
//!
//! Clean Architecture structure:
//! - `domain/` - Message entity, content value object, repository trait
//! - `application/` - Create/list use cases
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers and router
//!
//! Routes are meant to be nested under `/api` and wrapped by the gate
//! shaping pipeline; this crate itself applies no throttling.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{MessageError, MessageResult};
pub use infra::postgres::PgMessageRepository;
pub use presentation::router::messages_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
