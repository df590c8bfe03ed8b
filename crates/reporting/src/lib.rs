//! Funnel reporting — recent-event aggregation and conversion-rate math.

pub mod funnel;
pub mod rates;

pub use funnel::FunnelService;
