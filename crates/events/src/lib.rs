//! Event-counting collaborators for the funnel service.

pub mod clickhouse;
pub mod memory;
pub mod store;

pub use self::clickhouse::ClickHouseEventStore;
pub use self::memory::InMemoryEventStore;
pub use self::store::EventStore;
