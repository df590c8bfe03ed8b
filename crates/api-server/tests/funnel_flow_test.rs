//! Integration tests for the funnel aggregation endpoints, driven through
//! the full router with an in-memory event store.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pulse_api::rest::AppState;
use pulse_api::ApiServer;
use pulse_core::types::FunnelStage;
use pulse_core::{PulseError, PulseResult};
use pulse_events::{EventStore, InMemoryEventStore};
use pulse_presenter::{FunnelPresenter, FunnelTheme};
use pulse_reporting::FunnelService;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceExt;

fn state_with_store(store: Arc<dyn EventStore>) -> AppState {
    AppState {
        funnel: Arc::new(FunnelService::new(store)),
        presenter: Arc::new(FunnelPresenter::new(FunnelTheme::classic())),
        node_id: "test-node".to_string(),
        start_time: Instant::now(),
    }
}

fn seeded_store() -> InMemoryEventStore {
    let store = InMemoryEventStore::new(24);
    for _ in 0..10 {
        store.record(FunnelStage::Session, Some("user_1"));
    }
    for _ in 0..4 {
        store.record(FunnelStage::ProductView, Some("user_1"));
    }
    for _ in 0..2 {
        store.record(FunnelStage::Checkout, Some("user_1"));
    }
    store.record(FunnelStage::Purchase, Some("user_1"));
    store
}

async fn get_json(
    app: axum::Router,
    uri: &str,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_funnel_data_returns_ordered_wire_contract() {
    let app = ApiServer::router(state_with_store(Arc::new(seeded_store())));
    let (status, json) = get_json(app, "/funnel-data").await;

    assert_eq!(status, StatusCode::OK);

    let steps = json["funnel_data"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["type"], "session");
    assert_eq!(steps[0]["count"], 10);
    assert_eq!(steps[1]["type"], "product_view");
    assert_eq!(steps[1]["count"], 4);
    assert_eq!(steps[2]["type"], "checkout");
    assert_eq!(steps[2]["count"], 2);
    assert_eq!(steps[3]["type"], "purchase");
    assert_eq!(steps[3]["count"], 1);
}

/// Event store whose backing query always fails.
struct UnreachableStore;

#[async_trait]
impl EventStore for UnreachableStore {
    async fn count_recent_events(&self, _stage: FunnelStage) -> PulseResult<u64> {
        Err(PulseError::EventStore("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_aggregation_failure_maps_to_500_without_partial_body() {
    let app = ApiServer::router(state_with_store(Arc::new(UnreachableStore)));
    let (status, json) = get_json(app, "/funnel-data").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to fetch funnel data");
    assert!(json.get("funnel_data").is_none());
}

#[tokio::test]
async fn test_funnel_view_renders_populated_model() {
    let app = ApiServer::router(state_with_store(Arc::new(seeded_store())));
    let (status, json) = get_json(app, "/funnel-view").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "populated");

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[0]["label"], "Sessions");
    assert_eq!(steps[0]["conversion_from_previous"], serde_json::Value::Null);
    assert_eq!(steps[1]["conversion_from_previous"], "40.0");
    assert_eq!(steps[3]["end_to_end"], "10.0");
}

#[tokio::test]
async fn test_funnel_view_degrades_to_empty_state_on_failure() {
    let app = ApiServer::router(state_with_store(Arc::new(UnreachableStore)));
    let (status, json) = get_json(app, "/funnel-view").await;

    // The view endpoint never errors; it renders the no-data indicator.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "empty");
    assert_eq!(json["message"], "No funnel data available");
}

#[tokio::test]
async fn test_health_reports_node_identity() {
    let app = ApiServer::router(state_with_store(Arc::new(seeded_store())));
    let (status, json) = get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["node_id"], "test-node");
}
