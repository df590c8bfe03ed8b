//! Funnel presentation — themed view-model assembly for the funnel section.

pub mod theme;
pub mod view;

pub use theme::{FunnelTheme, StepLabels};
pub use view::{FunnelPresenter, FunnelView, StepView};
