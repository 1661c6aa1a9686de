//! Domain Layer - Shaping policies and probes
//!
//! This layer contains:
//! - Shaping policies (RateLimitPolicy, ThrottlePolicy)
//! - Dependency health value objects
//! - Probe traits (interfaces)

pub mod policy;
pub mod probe;
