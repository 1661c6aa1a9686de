//! Gate - Traffic Shaping Module
//!
//! Clean Architecture structure:
//! - `domain/` - Shaping policies, dependency health, probe traits
//! - `application/` - Delay injection and health reporting use cases
//! - `infra/` - Database probe implementation
//! - `presentation/` - HTTP middleware, handlers, router
//!
//! ## Shaping Model
//! - Every request through a shaped router is delayed first, then admitted or rejected
//! - Admission is one shared token bucket: one token per request, bursts up to capacity
//! - Rejected requests get 429 with a JSON error body and consume no tokens
//! - The server never retries or queues; clients should retry with exponential backoff
//! - Health reporting lives outside the shaped stack and is never delayed or rejected

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use error::{GateError, GateResult};
pub use infra::postgres::PgDependencyProbe;
pub use presentation::router::{echo_router, health_router, shape, shape_state};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
