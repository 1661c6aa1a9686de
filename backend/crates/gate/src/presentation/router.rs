//! Gate Router
//!
//! Assembles the shaping pipeline and the unshaped health route.

use std::sync::Arc;

use axum::middleware::from_fn;
use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::GateConfig;
use crate::application::delay::DelayInjector;
use crate::domain::probe::DependencyProbe;
use crate::infra::postgres::PgDependencyProbe;
use crate::presentation::handlers::{self, HealthAppState};
use crate::presentation::middleware::{self, ShapeState};
use platform::clock::SystemClock;
use platform::rate_limit::TokenBucket;

/// Build the shared shaping state from configuration
pub fn shape_state(config: &GateConfig) -> ShapeState {
    let limiter = TokenBucket::new(
        config.rate_limit.requests(),
        config.rate_limit.rate_per_second(),
        Arc::new(SystemClock::new()),
    );
    ShapeState {
        limiter: Arc::new(limiter),
        injector: Arc::new(DelayInjector::new(config.throttle)),
    }
}

/// Wrap a router with the shaping pipeline.
///
/// The admission layer is added first and the throttle layer last, so
/// the throttle sits outermost and always runs before admission.
pub fn shape(router: Router, state: ShapeState) -> Router {
    let admission = state.clone();
    let throttle = state;
    router
        .layer(from_fn(move |req, next| {
            let state = admission.clone();
            middleware::admit(state, req, next)
        }))
        .layer(from_fn(move |req, next| {
            let state = throttle.clone();
            middleware::throttle_delay(state, req, next)
        }))
}

/// Create the echo router. Meant to be nested under `/api` and shaped.
pub fn echo_router() -> Router {
    Router::new()
        .route("/get", get(handlers::echo_get))
        .route("/post", post(handlers::echo_post))
}

/// Create the health router with PostgreSQL probe
pub fn health_router(pool: sqlx::PgPool, config: GateConfig) -> Router {
    health_router_generic(PgDependencyProbe::new(pool), config)
}

/// Create a generic health router for any probe implementation
pub fn health_router_generic<P>(probe: P, config: GateConfig) -> Router
where
    P: DependencyProbe + Clone + Send + Sync + 'static,
{
    let state = HealthAppState {
        probe: Arc::new(probe),
        config: Arc::new(config),
    };

    Router::new()
        .route("/health", get(handlers::health::<P>))
        .with_state(state)
}
