//! API DTOs (Data Transfer Objects)

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::application::report_health::HealthReport;

/// Current time rendered the way every response formats it
pub(crate) fn rfc3339_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Response for GET /api/get
#[derive(Debug, Clone, Serialize)]
pub struct EchoGetResponse {
    pub message: &'static str,
    pub time: String,
}

/// Response for POST /api/post
#[derive(Debug, Clone, Serialize)]
pub struct EchoPostResponse {
    pub message: &'static str,
    pub received: serde_json::Value,
    pub time: String,
}

/// Response for GET /health. Same shape for 200 and 503.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub time: String,
    pub database: DatabaseHealth,
    pub configuration: ShapingConfiguration,
    pub server: ServerInfo,
}

/// Database section of the health report
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Configuration echo section
#[derive(Debug, Clone, Serialize)]
pub struct ShapingConfiguration {
    pub rate_limiting: RateLimiting,
    pub throttling: Throttling,
}

#[derive(Debug, Clone, Serialize)]
pub struct RateLimiting {
    pub requests: u32,
    pub period_seconds: u32,
    pub rate_per_second: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Throttling {
    pub min_ms: u64,
    pub max_ms: u64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub port: u16,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        let database_status = report.database.status_label();
        Self {
            status: report.status.as_str(),
            time: report
                .checked_at
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            database: DatabaseHealth {
                status: database_status,
                error: report.database.error,
            },
            configuration: ShapingConfiguration {
                rate_limiting: RateLimiting {
                    requests: report.rate_limit.requests(),
                    period_seconds: report.rate_limit.period_secs(),
                    rate_per_second: report.rate_limit.rate_per_second(),
                },
                throttling: Throttling {
                    min_ms: report.throttle.min_ms(),
                    max_ms: report.throttle.max_ms(),
                    enabled: report.throttle.enabled(),
                },
            },
            server: ServerInfo { port: report.port },
        }
    }
}
