//! REST API handlers for funnel aggregation and operational endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pulse_core::types::FunnelData;
use pulse_presenter::{FunnelPresenter, FunnelView};
use pulse_reporting::FunnelService;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::error;
use utoipa::ToSchema;

/// Shared application state for REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub funnel: Arc<FunnelService>,
    pub presenter: Arc<FunnelPresenter>,
    pub node_id: String,
    pub start_time: Instant,
}

/// GET /funnel-data — recent event counts for every funnel stage, in funnel
/// order.
#[utoipa::path(
    get,
    path = "/funnel-data",
    tag = "Funnel",
    responses(
        (status = 200, description = "Ordered funnel step counts", body = FunnelDataResponse),
        (status = 500, description = "Aggregation failed", body = ErrorResponse),
    )
)]
pub async fn handle_funnel_data(
    State(state): State<AppState>,
) -> Result<Json<FunnelDataResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.funnel.funnel_data().await {
        Ok(funnel_data) => {
            metrics::counter!("funnel.api.requests").increment(1);
            Ok(Json(FunnelDataResponse { funnel_data }))
        }
        Err(e) => {
            error!(error = %e, "Error fetching funnel data");
            metrics::counter!("funnel.api.errors").increment(1);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch funnel data".to_string(),
                }),
            ))
        }
    }
}

/// GET /funnel-view — the themed, renderable view model for the funnel
/// section. Aggregation failures surface as the empty state rather than an
/// error; the view must always render.
#[utoipa::path(
    get,
    path = "/funnel-view",
    tag = "Funnel",
    responses(
        (status = 200, description = "Renderable funnel view model", body = FunnelView),
    )
)]
pub async fn handle_funnel_view(State(state): State<AppState>) -> Json<FunnelView> {
    match state.funnel.funnel_data().await {
        Ok(data) => Json(state.presenter.present(Some(&data))),
        Err(e) => {
            error!(error = %e, "Error fetching funnel data for view");
            metrics::counter!("funnel.api.errors").increment(1);
            Json(state.presenter.present(None))
        }
    }
}

/// GET /health — Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses(
        (status = 200, description = "Service health summary", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready — Readiness probe for Kubernetes.
/// Returns 200 only when the service is ready to accept traffic.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Operations",
    responses(
        (status = 200, description = "Ready to accept traffic"),
        (status = 503, description = "Not ready"),
    )
)]
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live — Liveness probe for Kubernetes.
#[utoipa::path(
    get,
    path = "/live",
    tag = "Operations",
    responses(
        (status = 200, description = "Process is live"),
    )
)]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize, ToSchema)]
pub struct FunnelDataResponse {
    pub funnel_data: FunnelData,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}
