//! Shaping Middleware
//!
//! Two layers applied to every shaped route: a throttle layer that
//! injects a sampled delay, then an admission layer backed by the
//! shared token bucket. The delay always runs first, so requests that
//! end up rejected pay it too.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::delay::DelayInjector;
use crate::error::GateError;
use platform::rate_limit::TokenBucket;

/// Middleware state shared by the shaping layers
#[derive(Clone)]
pub struct ShapeState {
    pub limiter: Arc<TokenBucket>,
    pub injector: Arc<DelayInjector>,
}

/// Middleware that suspends the request for a sampled delay
pub async fn throttle_delay(state: ShapeState, req: Request<Body>, next: Next) -> Response {
    let applied = state.injector.wait().await;
    if !applied.is_zero() {
        tracing::debug!(
            delay_ms = applied.as_millis() as u64,
            path = %req.uri().path(),
            "Throttle delay applied"
        );
    }
    next.run(req).await
}

/// Middleware that admits or rejects through the token bucket
pub async fn admit(
    state: ShapeState,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if !state.limiter.try_acquire() {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "Rate limit exceeded"
        );
        return Err(GateError::RateLimited.into_response());
    }
    Ok(next.run(req).await)
}
