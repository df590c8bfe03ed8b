//! Funnel view theming.
//!
//! The dashboard historically shipped several near-identical funnel sections
//! differing only in palette and spacing constants. Those variants collapse
//! into named presets of one theme structure, passed explicitly to the
//! presenter.

use pulse_core::types::FunnelStage;

/// Display labels for the four funnel stages, overridable per deployment.
#[derive(Debug, Clone)]
pub struct StepLabels {
    pub session: String,
    pub product_view: String,
    pub checkout: String,
    pub purchase: String,
}

impl StepLabels {
    pub fn label_for(&self, stage: FunnelStage) -> &str {
        match stage {
            FunnelStage::Session => &self.session,
            FunnelStage::ProductView => &self.product_view,
            FunnelStage::Checkout => &self.checkout,
            FunnelStage::Purchase => &self.purchase,
        }
    }
}

impl Default for StepLabels {
    fn default() -> Self {
        Self {
            session: FunnelStage::Session.display_label().to_string(),
            product_view: FunnelStage::ProductView.display_label().to_string(),
            checkout: FunnelStage::Checkout.display_label().to_string(),
            purchase: FunnelStage::Purchase.display_label().to_string(),
        }
    }
}

/// Style options recognized by the funnel renderer.
#[derive(Debug, Clone)]
pub struct FunnelTheme {
    pub name: &'static str,
    /// Fill color per stage, in funnel order.
    pub step_colors: [&'static str; 4],
    pub background: &'static str,
    pub heading_color: &'static str,
    /// Color of the step label and rate annotations.
    pub annotation_color: &'static str,
    pub baseline_count_color: &'static str,
    pub step_count_color: &'static str,
    pub section_margin: u16,
    pub section_padding: u16,
    pub card_padding: u16,
    pub column_gap: u16,
    /// Height of the baseline bar; later bars scale against it.
    pub max_bar_height: u16,
    pub labels: StepLabels,
}

impl FunnelTheme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            step_colors: ["#2563eb", "#3b82f6", "#60a5fa", "#93c5fd"],
            background: "#1b1f23",
            heading_color: "#ffffff",
            annotation_color: "#94a3b8",
            baseline_count_color: "#ffffff",
            step_count_color: "#60a5fa",
            section_margin: 48,
            section_padding: 16,
            card_padding: 32,
            column_gap: 40,
            max_bar_height: 120,
            labels: StepLabels::default(),
        }
    }

    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            step_colors: ["#193366", "#2952a3", "#3373df", "#4287f5"],
            background: "#10141a",
            heading_color: "#e2e8f0",
            annotation_color: "#64748b",
            baseline_count_color: "#e2e8f0",
            step_count_color: "#4287f5",
            section_margin: 48,
            section_padding: 16,
            card_padding: 32,
            column_gap: 40,
            max_bar_height: 120,
            labels: StepLabels::default(),
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "ocean",
            step_colors: ["#0f766e", "#0d9488", "#14b8a6", "#5eead4"],
            background: "#0b1120",
            heading_color: "#f0fdfa",
            annotation_color: "#94a3b8",
            baseline_count_color: "#f0fdfa",
            step_count_color: "#2dd4bf",
            section_margin: 48,
            section_padding: 16,
            card_padding: 32,
            column_gap: 40,
            max_bar_height: 120,
            labels: StepLabels::default(),
        }
    }

    pub fn slate() -> Self {
        Self {
            name: "slate",
            step_colors: ["#334155", "#475569", "#64748b", "#94a3b8"],
            background: "#0f172a",
            heading_color: "#f8fafc",
            annotation_color: "#94a3b8",
            baseline_count_color: "#f8fafc",
            step_count_color: "#cbd5e1",
            section_margin: 32,
            section_padding: 12,
            card_padding: 24,
            column_gap: 24,
            max_bar_height: 96,
            labels: StepLabels::default(),
        }
    }

    /// Resolve a configured preset name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "midnight" => Some(Self::midnight()),
            "ocean" => Some(Self::ocean()),
            "slate" => Some(Self::slate()),
            _ => None,
        }
    }

    pub fn color_for(&self, stage: FunnelStage) -> &'static str {
        self.step_colors[stage.ordinal()]
    }
}

impl Default for FunnelTheme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_resolves_by_name() {
        for name in ["classic", "midnight", "ocean", "slate"] {
            let theme = FunnelTheme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(FunnelTheme::from_name("neon").is_none());
    }

    #[test]
    fn test_stage_colors_follow_funnel_order() {
        let theme = FunnelTheme::classic();
        assert_eq!(theme.color_for(FunnelStage::Session), "#2563eb");
        assert_eq!(theme.color_for(FunnelStage::Purchase), "#93c5fd");
    }

    #[test]
    fn test_default_labels() {
        let labels = StepLabels::default();
        assert_eq!(labels.label_for(FunnelStage::Session), "Sessions");
        assert_eq!(labels.label_for(FunnelStage::ProductView), "Product Views");
    }
}
