//! Shaping Policies
//!
//! Validated, immutable descriptions of how traffic is shaped. Built
//! once at startup and shared for the life of the process.

use thiserror::Error;

/// Policy construction errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    /// A zero request budget would admit nothing
    #[error("rate limit request budget must be at least 1")]
    ZeroRequests,

    /// A zero period has no meaningful refill rate
    #[error("rate limit period must be at least 1 second")]
    ZeroPeriod,

    /// An enabled throttle with an inverted range
    #[error("throttle minimum must not exceed maximum")]
    MinAboveMax,
}

/// Admission policy: `requests` per `period_secs`, bursts up to `requests`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    requests: u32,
    period_secs: u32,
}

impl RateLimitPolicy {
    /// Validate and build a policy. Both values must be at least 1.
    pub fn new(requests: u32, period_secs: u32) -> Result<Self, PolicyError> {
        if requests == 0 {
            return Err(PolicyError::ZeroRequests);
        }
        if period_secs == 0 {
            return Err(PolicyError::ZeroPeriod);
        }
        Ok(Self {
            requests,
            period_secs,
        })
    }

    /// Request budget per period, also the burst capacity
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Refill period in seconds
    pub fn period_secs(&self) -> u32 {
        self.period_secs
    }

    /// Sustained refill rate in tokens per second.
    ///
    /// Fractional rates are expected: 10 requests per 60 seconds is
    /// roughly 0.167 tokens per second.
    pub fn rate_per_second(&self) -> f64 {
        f64::from(self.requests) / f64::from(self.period_secs)
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            requests: 10,
            period_secs: 1,
        }
    }
}

/// Delay policy: uniform jitter between `min_ms` and `max_ms`
///
/// A zero `max_ms` disables throttling entirely, whatever `min_ms` says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    min_ms: u64,
    max_ms: u64,
}

impl ThrottlePolicy {
    /// Validate and build a policy.
    ///
    /// An inverted range is only an error when the policy is enabled;
    /// with `max_ms == 0` the policy is disabled and `min_ms` is ignored.
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, PolicyError> {
        if max_ms > 0 && min_ms > max_ms {
            return Err(PolicyError::MinAboveMax);
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Policy that never delays
    pub fn disabled() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    /// Lower bound of the sampled delay in milliseconds
    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    /// Upper bound of the sampled delay in milliseconds
    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Throttling is active only when an upper bound is set
    pub fn enabled(&self) -> bool {
        self.max_ms > 0
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::disabled()
    }
}
