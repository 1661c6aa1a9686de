//! Dependency Probes
//!
//! Interfaces for checking backing services. Implementation is in the
//! infrastructure layer.

use crate::error::GateResult;

/// Outcome of a single dependency probe, recomputed on every health query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyHealth {
    pub connected: bool,
    pub error: Option<String>,
}

impl DependencyHealth {
    /// Probe succeeded
    pub fn connected() -> Self {
        Self {
            connected: true,
            error: None,
        }
    }

    /// Probe failed with the given error string
    pub fn disconnected(error: impl Into<String>) -> Self {
        Self {
            connected: false,
            error: Some(error.into()),
        }
    }

    /// Wire label for the probe outcome
    pub fn status_label(&self) -> &'static str {
        if self.connected {
            "connected"
        } else {
            "disconnected"
        }
    }
}

/// Dependency probe trait
#[trait_variant::make(DependencyProbe: Send)]
pub trait LocalDependencyProbe {
    /// One round trip to the backing store
    async fn ping(&self) -> GateResult<()>;
}
