//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::config::GateConfig;
use crate::application::report_health::{ReportHealthUseCase, ReportStatus};
use crate::domain::probe::DependencyProbe;
use crate::error::{GateError, GateResult};
use crate::presentation::dto::{EchoGetResponse, EchoPostResponse, HealthResponse, rfc3339_now};

/// Shared state for health handlers
#[derive(Clone)]
pub struct HealthAppState<P>
where
    P: DependencyProbe + Clone + Send + Sync + 'static,
{
    pub probe: Arc<P>,
    pub config: Arc<GateConfig>,
}

/// GET /health
pub async fn health<P>(State(state): State<HealthAppState<P>>) -> impl IntoResponse
where
    P: DependencyProbe + Clone + Send + Sync + 'static,
{
    let use_case = ReportHealthUseCase::new(state.probe.clone(), state.config.clone());
    let report = use_case.execute().await;

    let status = match report.status {
        ReportStatus::Ok => StatusCode::OK,
        ReportStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status, Json(HealthResponse::from(report)))
}

/// GET /api/get
pub async fn echo_get() -> Json<EchoGetResponse> {
    Json(EchoGetResponse {
        message: "GET request received successfully",
        time: rfc3339_now(),
    })
}

/// POST /api/post
///
/// Echoes any well-formed JSON document back to the caller. The body
/// is parsed by hand so a malformed payload produces the flat error
/// object instead of axum's rejection format.
pub async fn echo_post(body: Bytes) -> GateResult<Json<EchoPostResponse>> {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| GateError::InvalidPayload)?;

    Ok(Json(EchoPostResponse {
        message: "POST request received successfully",
        received: payload,
        time: rfc3339_now(),
    }))
}
