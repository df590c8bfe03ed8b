//! API server — HTTP router, middleware, and metrics exporter.

use crate::rest::{self, AppState};
use crate::swagger::ApiDoc;
use axum::routing::get;
use axum::Router;
use pulse_core::config::AppConfig;
use pulse_presenter::FunnelPresenter;
use pulse_reporting::FunnelService;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// HTTP API server for the funnel analytics service.
pub struct ApiServer {
    config: AppConfig,
    funnel: Arc<FunnelService>,
    presenter: Arc<FunnelPresenter>,
}

impl ApiServer {
    pub fn new(
        config: AppConfig,
        funnel: Arc<FunnelService>,
        presenter: Arc<FunnelPresenter>,
    ) -> Self {
        Self {
            config,
            funnel,
            presenter,
        }
    }

    /// Build the HTTP router. Also used by integration tests.
    pub fn router(state: AppState) -> Router {
        Router::new()
            // Funnel endpoints
            .route("/funnel-data", get(rest::handle_funnel_data))
            .route("/funnel-view", get(rest::handle_funnel_view))
            // Operational endpoints
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            // API docs
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the HTTP REST server.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let state = AppState {
            funnel: self.funnel.clone(),
            presenter: self.presenter.clone(),
            node_id: self.config.node_id.clone(),
            start_time: Instant::now(),
        };

        let app = Self::router(state);

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the metrics server on a separate port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
