//! Dashboard tabs.

use serde::{Deserialize, Serialize};

/// The three independent views available after onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardTab {
    #[default]
    Analysis,
    ProgressTracker,
    DailyTips,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Analysis,
        DashboardTab::ProgressTracker,
        DashboardTab::DailyTips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Analysis => "AI Analysis",
            DashboardTab::ProgressTracker => "Progress Tracker",
            DashboardTab::DailyTips => "Daily Tips",
        }
    }
}
