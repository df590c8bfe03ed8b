use async_trait::async_trait;
use pulse_core::types::FunnelStage;
use pulse_core::PulseResult;

/// Counts recent user events by funnel stage.
///
/// "Recent" is the store's own policy (a trailing window carried in its
/// configuration); callers only name the stage they want counted.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn count_recent_events(&self, stage: FunnelStage) -> PulseResult<u64>;
}
