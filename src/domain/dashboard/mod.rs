//! Dashboard module - post-onboarding views.
//!
//! - `controller` - tab selection and the single-screen analyze/reset/save flow
//! - `progress` - before/after photo comparison
//! - `tips` - static daily tips

mod controller;
mod progress;
mod tab;
mod tips;

pub use controller::{
    AnalysisPanel, DashboardAction, DashboardController, DashboardEffect, DashboardError,
    DashboardView, Notification, TabContent,
};
pub use progress::{Comparison, PhotoSlot, ProgressPhoto, ProgressTracker};
pub use tab::DashboardTab;
pub use tips::{DailyTip, DAILY_TIPS};
