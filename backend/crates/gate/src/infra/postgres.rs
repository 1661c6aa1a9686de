//! PostgreSQL Probe Implementation

use std::time::Duration;

use sqlx::PgPool;

use crate::domain::probe::DependencyProbe;
use crate::error::{GateError, GateResult};

/// Upper bound on a single probe round trip, so a stalled database
/// cannot hang the health endpoint.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// PostgreSQL-backed dependency probe
#[derive(Clone)]
pub struct PgDependencyProbe {
    pool: PgPool,
}

impl PgDependencyProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DependencyProbe for PgDependencyProbe {
    async fn ping(&self) -> GateResult<()> {
        let query = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&self.pool);

        match tokio::time::timeout(PROBE_TIMEOUT, query).await {
            Ok(result) => {
                result?;
                Ok(())
            }
            Err(_) => Err(GateError::ProbeTimeout),
        }
    }
}
