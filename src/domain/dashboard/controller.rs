//! Dashboard controller - tab selection plus the single-screen analysis flow.
//!
//! The analysis flow (select photo, analyze, reset, save) is independent of
//! the onboarding workflow. Tab switches only change which view is projected;
//! they never touch in-flight analysis state.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

use super::{DashboardTab, PhotoSlot, ProgressTracker, DAILY_TIPS, DailyTip};
use crate::domain::analysis::DetailedAnalysisResult;
use crate::domain::foundation::Percentage;
use crate::domain::image::SelectedImage;

/// Events fed into the dashboard.
#[derive(Debug, Clone)]
pub enum DashboardAction {
    SelectTab(DashboardTab),
    SelectImage(SelectedImage),
    Analyze,
    AnalysisSucceeded(DetailedAnalysisResult),
    AnalysisFailed { message: String },
    Reset,
    Save,
    SaveCompleted,
    SaveFailed,
    SetProgressPhoto { slot: PhotoSlot, image_ref: String },
    SetProgressDate { slot: PhotoSlot, date: NaiveDate },
    MoveComparisonSlider(Percentage),
}

/// Work the caller must perform after an accepted action.
#[derive(Debug, Clone)]
pub enum DashboardEffect {
    None,
    /// Read, encode and analyze the photo, then report back with
    /// `AnalysisSucceeded` or `AnalysisFailed`.
    AnalyzeDetailed(SelectedImage),
    /// Append the result to the store, then report back with
    /// `SaveCompleted` or `SaveFailed`.
    SaveAnalysis(DetailedAnalysisResult),
}

/// One-shot message for the user; read once with `take_notification`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Saved,
    SaveFailed,
    NothingToSave,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Saved => "Analysis saved to your profile!",
            Notification::SaveFailed => "There was an error saving your analysis.",
            Notification::NothingToSave => "No analysis result to save.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("An analysis request is already outstanding")]
    RequestInFlight,

    #[error("No image has been selected")]
    NoImageSelected,

    #[error("No analysis request is outstanding")]
    NoPendingRequest,
}

/// What the Analysis tab shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisPanel<'a> {
    InProgress,
    Failed(&'a str),
    Ready(&'a DetailedAnalysisResult),
    /// Placeholder inviting the user to upload a photo.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabContent<'a> {
    Analysis(AnalysisPanel<'a>),
    ProgressTracker(&'a ProgressTracker),
    DailyTips(&'static [DailyTip]),
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub active_tab: DashboardTab,
    pub selected_image: Option<&'a SelectedImage>,
    pub can_select_image: bool,
    pub can_analyze: bool,
    pub can_reset: bool,
    pub content: TabContent<'a>,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardController {
    active_tab: DashboardTab,
    image: Option<SelectedImage>,
    result: Option<DetailedAnalysisResult>,
    is_analyzing: bool,
    error: Option<String>,
    notification: Option<Notification>,
    progress: ProgressTracker,
}

impl DashboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a progress tracker dated `today`.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self {
            progress: ProgressTracker::new(today),
            ..Self::default()
        }
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn result(&self) -> Option<&DetailedAnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Returns the pending notification and clears it.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn analysis_panel(&self) -> AnalysisPanel<'_> {
        if self.is_analyzing {
            AnalysisPanel::InProgress
        } else if let Some(error) = &self.error {
            AnalysisPanel::Failed(error)
        } else if let Some(result) = &self.result {
            AnalysisPanel::Ready(result)
        } else {
            AnalysisPanel::Empty
        }
    }

    pub fn view(&self) -> DashboardView<'_> {
        let content = match self.active_tab {
            DashboardTab::Analysis => TabContent::Analysis(self.analysis_panel()),
            DashboardTab::ProgressTracker => TabContent::ProgressTracker(&self.progress),
            DashboardTab::DailyTips => TabContent::DailyTips(&DAILY_TIPS),
        };

        DashboardView {
            active_tab: self.active_tab,
            selected_image: self.image.as_ref(),
            can_select_image: !self.is_analyzing,
            can_analyze: self.image.is_some() && !self.is_analyzing,
            can_reset: self.result.is_some() && !self.is_analyzing,
            content,
        }
    }

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` when a guard fails; state is left untouched.
    pub fn apply(&mut self, action: DashboardAction) -> Result<DashboardEffect, DashboardError> {
        use DashboardAction as A;

        match action {
            A::SelectTab(tab) => {
                self.active_tab = tab;
            }
            A::SelectImage(image) => {
                if self.is_analyzing {
                    return Err(DashboardError::RequestInFlight);
                }
                if self.result.is_some() {
                    self.clear_analysis();
                }
                self.image = Some(image);
            }
            A::Analyze => {
                if self.is_analyzing {
                    return Err(DashboardError::RequestInFlight);
                }
                let image = self.image.clone().ok_or(DashboardError::NoImageSelected)?;
                self.is_analyzing = true;
                self.error = None;
                self.result = None;
                debug!(image = image.label(), "dashboard analysis requested");
                return Ok(DashboardEffect::AnalyzeDetailed(image));
            }
            A::AnalysisSucceeded(result) => {
                if !self.is_analyzing {
                    return Err(DashboardError::NoPendingRequest);
                }
                self.is_analyzing = false;
                self.result = Some(result);
                self.active_tab = DashboardTab::Analysis;
            }
            A::AnalysisFailed { message } => {
                if !self.is_analyzing {
                    return Err(DashboardError::NoPendingRequest);
                }
                self.is_analyzing = false;
                self.error = Some(message);
            }
            A::Reset => {
                if self.is_analyzing {
                    return Err(DashboardError::RequestInFlight);
                }
                self.image = None;
                self.clear_analysis();
            }
            A::Save => match &self.result {
                Some(result) => return Ok(DashboardEffect::SaveAnalysis(result.clone())),
                None => self.notification = Some(Notification::NothingToSave),
            },
            A::SaveCompleted => self.notification = Some(Notification::Saved),
            A::SaveFailed => self.notification = Some(Notification::SaveFailed),
            A::SetProgressPhoto { slot, image_ref } => self.progress.set_photo(slot, image_ref),
            A::SetProgressDate { slot, date } => self.progress.set_date(slot, date),
            A::MoveComparisonSlider(position) => self.progress.move_slider(position),
        }

        Ok(DashboardEffect::None)
    }

    fn clear_analysis(&mut self) {
        self.result = None;
        self.error = None;
    }
}
