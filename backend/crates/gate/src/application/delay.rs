//! Delay Injection
//!
//! Samples and applies the uniform jitter configured by a
//! [`ThrottlePolicy`]. Every shaped request pays this delay before
//! admission is even considered.

use std::time::Duration;

use crate::domain::policy::ThrottlePolicy;
use platform::jitter;

/// Injects a sampled delay ahead of request handling
#[derive(Debug, Clone)]
pub struct DelayInjector {
    policy: ThrottlePolicy,
}

impl DelayInjector {
    pub fn new(policy: ThrottlePolicy) -> Self {
        Self { policy }
    }

    /// The policy this injector enforces
    pub fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    /// Sample the next delay. Zero when throttling is disabled.
    pub fn next_delay(&self) -> Duration {
        if !self.policy.enabled() {
            return Duration::ZERO;
        }
        let ms = jitter::uniform_ms(&mut rand::rng(), self.policy.min_ms(), self.policy.max_ms());
        Duration::from_millis(ms)
    }

    /// Suspend the current task for a freshly sampled delay and return
    /// what was applied.
    ///
    /// Only the calling task is suspended; concurrent requests are not
    /// held back. A disabled policy returns zero without yielding.
    pub async fn wait(&self) -> Duration {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        delay
    }
}
