//! Presentation Layer
//!
//! HTTP middleware, handlers and DTOs for the API.

pub mod handlers;
pub mod dto;
pub mod middleware;
pub mod router;
