//! Report Health Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::GateConfig;
use crate::domain::policy::{RateLimitPolicy, ThrottlePolicy};
use crate::domain::probe::{DependencyHealth, DependencyProbe};

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Ok,
    Degraded,
}

impl ReportStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ok => "ok",
            ReportStatus::Degraded => "degraded",
        }
    }
}

/// Point-in-time health view, constructed fresh per request
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status: ReportStatus,
    pub database: DependencyHealth,
    pub rate_limit: RateLimitPolicy,
    pub throttle: ThrottlePolicy,
    pub port: u16,
    pub checked_at: DateTime<Utc>,
}

/// Report Health Use Case
pub struct ReportHealthUseCase<P>
where
    P: DependencyProbe,
{
    probe: Arc<P>,
    config: Arc<GateConfig>,
}

impl<P> ReportHealthUseCase<P>
where
    P: DependencyProbe,
{
    pub fn new(probe: Arc<P>, config: Arc<GateConfig>) -> Self {
        Self { probe, config }
    }

    /// Probe the database exactly once and assemble a fresh report.
    ///
    /// Never touches limiter or throttle state; the report echoes the
    /// configured policies, not live token counts.
    pub async fn execute(&self) -> HealthReport {
        let database = match self.probe.ping().await {
            Ok(()) => DependencyHealth::connected(),
            Err(e) => {
                tracing::error!(error = %e, "Database health probe failed");
                DependencyHealth::disconnected(e.to_string())
            }
        };

        let status = if database.connected {
            ReportStatus::Ok
        } else {
            ReportStatus::Degraded
        };

        HealthReport {
            status,
            database,
            rate_limit: self.config.rate_limit,
            throttle: self.config.throttle,
            port: self.config.port,
            checked_at: Utc::now(),
        }
    }
}
