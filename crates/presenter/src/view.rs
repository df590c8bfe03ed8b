//! Funnel view-model assembly.

use pulse_core::types::{FunnelData, FunnelStage};
use pulse_reporting::rates;
use serde::Serialize;
use utoipa::ToSchema;

use crate::theme::FunnelTheme;

/// Renderable state of the funnel section.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FunnelView {
    /// Data fetch still in flight.
    Loading,
    /// Fetch finished but no usable steps came back.
    Empty { message: String },
    /// Fully populated funnel.
    Populated { steps: Vec<StepView> },
}

/// One rendered funnel step.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepView {
    pub stage: FunnelStage,
    pub label: String,
    pub count: u64,
    /// Thousands-separated count for display, e.g. `"1,000"`.
    pub display_count: String,
    /// Step-over-step conversion, absent on the baseline step.
    pub conversion_from_previous: Option<String>,
    /// End-to-end conversion, present on the final step only.
    pub end_to_end: Option<String>,
    pub color: String,
    /// Trapezoid geometry: bar height entering and leaving this step,
    /// scaled against the baseline bar.
    pub bar_start_height: u16,
    pub bar_end_height: u16,
}

/// Maps fetched funnel data onto a themed, renderable view model.
pub struct FunnelPresenter {
    theme: FunnelTheme,
}

impl FunnelPresenter {
    pub fn new(theme: FunnelTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &FunnelTheme {
        &self.theme
    }

    /// View model for a fetch that has not completed yet.
    pub fn loading(&self) -> FunnelView {
        FunnelView::Loading
    }

    /// Map a completed fetch onto the view model. Absent or malformed data
    /// becomes the empty state; it must never panic the view.
    pub fn present(&self, data: Option<&FunnelData>) -> FunnelView {
        let steps = match data {
            Some(d) if !d.steps.is_empty() => &d.steps,
            _ => {
                return FunnelView::Empty {
                    message: "No funnel data available".to_string(),
                }
            }
        };

        let baseline = steps[0].count;
        let last_index = steps.len() - 1;

        let step_views = steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let conversion_from_previous = (i > 0).then(|| {
                    rates::format_rate(rates::step_conversion_rate(
                        step.count,
                        steps[i - 1].count,
                    ))
                });
                let end_to_end = (i == last_index && i > 0)
                    .then(|| rates::format_rate(rates::end_to_end_rate(step.count, baseline)));

                let entering_count = if i == 0 { step.count } else { steps[i - 1].count };

                StepView {
                    stage: step.stage,
                    label: self.theme.labels.label_for(step.stage).to_string(),
                    count: step.count,
                    display_count: format_count(step.count),
                    conversion_from_previous,
                    end_to_end,
                    color: self.theme.color_for(step.stage).to_string(),
                    bar_start_height: scaled_height(
                        self.theme.max_bar_height,
                        entering_count,
                        baseline,
                    ),
                    bar_end_height: scaled_height(self.theme.max_bar_height, step.count, baseline),
                }
            })
            .collect();

        FunnelView::Populated { steps: step_views }
    }
}

/// Bar height proportional to the baseline count. A zero baseline collapses
/// the bar instead of dividing by zero.
fn scaled_height(max: u16, count: u64, baseline: u64) -> u16 {
    if baseline == 0 {
        return 0;
    }
    (max as f64 * count as f64 / baseline as f64).round() as u16
}

/// Group digits with comma separators, e.g. `1234567` → `"1,234,567"`.
fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
