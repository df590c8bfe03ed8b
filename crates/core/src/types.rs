use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The four funnel stages, broadest to narrowest.
///
/// Wire names (`session`, `product_view`, `checkout`, `purchase`) are a
/// published contract shared with the dashboard and the event rows; renaming
/// one is a breaking API change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    Session,
    ProductView,
    Checkout,
    Purchase,
}

impl FunnelStage {
    /// The fixed funnel sequence. Index 0 is the top-of-funnel baseline.
    pub const ORDER: [FunnelStage; 4] = [
        FunnelStage::Session,
        FunnelStage::ProductView,
        FunnelStage::Checkout,
        FunnelStage::Purchase,
    ];

    /// Position in the funnel sequence (0 = baseline).
    pub fn ordinal(self) -> usize {
        match self {
            FunnelStage::Session => 0,
            FunnelStage::ProductView => 1,
            FunnelStage::Checkout => 2,
            FunnelStage::Purchase => 3,
        }
    }

    pub fn is_baseline(self) -> bool {
        self.ordinal() == 0
    }

    /// Identifier used in the JSON contract and in stored event rows.
    pub fn wire_name(self) -> &'static str {
        match self {
            FunnelStage::Session => "session",
            FunnelStage::ProductView => "product_view",
            FunnelStage::Checkout => "checkout",
            FunnelStage::Purchase => "purchase",
        }
    }

    /// Human-readable label shown on the dashboard.
    pub fn display_label(self) -> &'static str {
        match self {
            FunnelStage::Session => "Sessions",
            FunnelStage::ProductView => "Product Views",
            FunnelStage::Checkout => "Checkouts",
            FunnelStage::Purchase => "Purchases",
        }
    }
}

/// One funnel step on the wire: `{ "type": ..., "count": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FunnelStep {
    #[serde(rename = "type")]
    pub stage: FunnelStage,
    pub count: u64,
}

/// An ordered funnel snapshot, baseline first. Computed fresh per request and
/// never mutated after assembly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FunnelData {
    pub steps: Vec<FunnelStep>,
}

impl FunnelData {
    pub fn baseline_count(&self) -> u64 {
        self.steps.first().map(|s| s.count).unwrap_or(0)
    }

    pub fn count_for(&self, stage: FunnelStage) -> Option<u64> {
        self.steps.iter().find(|s| s.stage == stage).map(|s| s.count)
    }
}

/// A recorded user-event row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEvent {
    pub event_id: Uuid,
    pub stage: FunnelStage,
    pub user_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}
