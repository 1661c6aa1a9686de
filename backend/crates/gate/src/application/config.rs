//! Application Configuration
//!
//! Configuration for the gate application layer.

use crate::domain::policy::{RateLimitPolicy, ThrottlePolicy};

/// Gate application configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Admission policy for the token bucket
    pub rate_limit: RateLimitPolicy,
    /// Delay policy for injected jitter
    pub throttle: ThrottlePolicy,
    /// Listening port, echoed in health reports
    pub port: u16,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitPolicy::default(),
            throttle: ThrottlePolicy::default(),
            port: 8888,
        }
    }
}
