//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Clock abstraction for testable time handling
//! - Token bucket rate limiting
//! - Jitter sampling for delay injection

pub mod clock;
pub mod jitter;
pub mod rate_limit;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;
