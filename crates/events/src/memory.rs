//! In-memory event store used by tests and demo mode.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use pulse_core::types::{FunnelStage, UserEvent};
use pulse_core::PulseResult;
use tracing::info;
use uuid::Uuid;

use crate::store::EventStore;

pub struct InMemoryEventStore {
    events: DashMap<Uuid, UserEvent>,
    recent_window: Duration,
}

impl InMemoryEventStore {
    pub fn new(recent_window_hours: u32) -> Self {
        Self {
            events: DashMap::new(),
            recent_window: Duration::hours(recent_window_hours as i64),
        }
    }

    /// Record a single event stamped with the current time.
    pub fn record(&self, stage: FunnelStage, user_id: Option<&str>) -> UserEvent {
        self.record_at(stage, user_id, Utc::now())
    }

    /// Record an event with an explicit timestamp.
    pub fn record_at(
        &self,
        stage: FunnelStage,
        user_id: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> UserEvent {
        let event = UserEvent {
            event_id: Uuid::new_v4(),
            stage,
            user_id: user_id.map(|s| s.to_string()),
            timestamp,
        };
        self.events.insert(event.event_id, event.clone());
        event
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Seed a plausible browse-to-purchase distribution for demo mode.
    pub fn with_demo_data(recent_window_hours: u32) -> Self {
        let store = Self::new(recent_window_hours);
        for (stage, total) in [
            (FunnelStage::Session, 1000),
            (FunnelStage::ProductView, 400),
            (FunnelStage::Checkout, 150),
            (FunnelStage::Purchase, 60),
        ] {
            for i in 0..total {
                store.record(stage, Some(&format!("user_{i}")));
            }
        }
        info!(events = store.event_count(), "Seeded demo events");
        store
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn count_recent_events(&self, stage: FunnelStage) -> PulseResult<u64> {
        let cutoff = Utc::now() - self.recent_window;
        let count = self
            .events
            .iter()
            .filter(|e| {
                let ev = e.value();
                ev.stage == stage && ev.timestamp >= cutoff
            })
            .count() as u64;
        Ok(count)
    }
}
