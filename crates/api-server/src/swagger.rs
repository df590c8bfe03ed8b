//! OpenAPI specification and Swagger UI configuration.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce Pulse API",
        version = "0.1.0",
        description = "E-commerce funnel analytics: aggregates recent user-event counts into a sessions → product views → checkouts → purchases funnel with conversion rates.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Funnel", description = "Funnel aggregation and view-model endpoints"),
        (name = "Operations", description = "Health, readiness, and liveness probes"),
    ),
    paths(
        // Funnel
        crate::rest::handle_funnel_data,
        crate::rest::handle_funnel_view,
        // Operations
        crate::rest::health_check,
        crate::rest::readiness,
        crate::rest::liveness,
    ),
    components(schemas(
        // Funnel types
        pulse_core::types::FunnelStage,
        pulse_core::types::FunnelStep,
        pulse_core::types::FunnelData,
        pulse_presenter::FunnelView,
        pulse_presenter::StepView,
        // REST response types
        crate::rest::FunnelDataResponse,
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
    ))
)]
pub struct ApiDoc;
