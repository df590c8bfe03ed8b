//! ClickHouse-backed event counting.

use async_trait::async_trait;
use pulse_core::config::ClickHouseConfig;
use pulse_core::types::FunnelStage;
use pulse_core::{PulseError, PulseResult};
use tracing::{debug, info};

use crate::store::EventStore;

/// Counts user-event rows stored in ClickHouse.
pub struct ClickHouseEventStore {
    client: clickhouse::Client,
    events_table: String,
    recent_window_hours: u32,
}

impl ClickHouseEventStore {
    pub fn new(config: &ClickHouseConfig) -> Self {
        let client = clickhouse::Client::default()
            .with_url(&config.url)
            .with_database(&config.database);

        info!(
            url = %config.url,
            database = %config.database,
            table = %config.events_table,
            window_hours = config.recent_window_hours,
            "ClickHouse event store initialized"
        );

        Self {
            client,
            events_table: config.events_table.clone(),
            recent_window_hours: config.recent_window_hours,
        }
    }
}

#[async_trait]
impl EventStore for ClickHouseEventStore {
    async fn count_recent_events(&self, stage: FunnelStage) -> PulseResult<u64> {
        let sql = format!(
            "SELECT count() FROM {} WHERE event_type = ? AND timestamp >= now() - INTERVAL ? HOUR",
            self.events_table
        );

        let count = self
            .client
            .query(&sql)
            .bind(stage.wire_name())
            .bind(self.recent_window_hours)
            .fetch_one::<u64>()
            .await
            .map_err(|e| PulseError::EventStore(e.to_string()))?;

        metrics::counter!("events.count_queries").increment(1);
        debug!(stage = stage.wire_name(), count, "Counted recent events");

        Ok(count)
    }
}
