//! Funnel aggregation — one count per stage, concurrent fan-out,
//! all-or-nothing assembly.

use pulse_core::types::{FunnelData, FunnelStage, FunnelStep};
use pulse_core::PulseResult;
use pulse_events::EventStore;
use std::sync::Arc;
use tracing::debug;

/// Aggregates recent event counts into an ordered funnel snapshot.
pub struct FunnelService {
    store: Arc<dyn EventStore>,
}

impl FunnelService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Count recent events for every funnel stage, in funnel order.
    ///
    /// The four counts are independent and dispatched concurrently. If any
    /// one fails the whole aggregation fails; no partial funnel is returned.
    pub async fn funnel_data(&self) -> PulseResult<FunnelData> {
        let (sessions, product_views, checkouts, purchases) = tokio::try_join!(
            self.store.count_recent_events(FunnelStage::Session),
            self.store.count_recent_events(FunnelStage::ProductView),
            self.store.count_recent_events(FunnelStage::Checkout),
            self.store.count_recent_events(FunnelStage::Purchase),
        )?;

        let data = FunnelData {
            steps: vec![
                FunnelStep {
                    stage: FunnelStage::Session,
                    count: sessions,
                },
                FunnelStep {
                    stage: FunnelStage::ProductView,
                    count: product_views,
                },
                FunnelStep {
                    stage: FunnelStage::Checkout,
                    count: checkouts,
                },
                FunnelStep {
                    stage: FunnelStage::Purchase,
                    count: purchases,
                },
            ],
        };

        debug!(baseline = data.baseline_count(), "Funnel snapshot assembled");
        Ok(data)
    }
}
