//! DashboardSession - drives the dashboard controller and runs its effects.

use std::sync::Arc;
use tracing::warn;

use super::{AnalysisClient, PersistenceError, ResultStore, IMAGE_UNREADABLE_MESSAGE};
use crate::adapters::image::encode_image;
use crate::domain::analysis::SavedAnalysisRecord;
use crate::domain::dashboard::{
    DashboardAction, DashboardController, DashboardEffect, DashboardError, DashboardView,
};
use crate::domain::image::SelectedImage;

pub struct DashboardSession {
    controller: DashboardController,
    client: Arc<AnalysisClient>,
    results: Arc<ResultStore>,
}

impl DashboardSession {
    pub fn new(client: Arc<AnalysisClient>, results: Arc<ResultStore>) -> Self {
        Self::with_controller(DashboardController::new(), client, results)
    }

    pub fn with_controller(
        controller: DashboardController,
        client: Arc<AnalysisClient>,
        results: Arc<ResultStore>,
    ) -> Self {
        Self {
            controller,
            client,
            results,
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    /// Pending notification, if any; reading it clears it.
    pub fn take_notification(&mut self) -> Option<&'static str> {
        self.controller.take_notification().map(|n| n.message())
    }

    pub fn view(&self) -> DashboardView<'_> {
        self.controller.view()
    }

    pub fn saved_analyses(&self) -> Result<Vec<SavedAnalysisRecord>, PersistenceError> {
        self.results.saved_analyses()
    }

    /// Applies an action without running the resulting effect.
    pub fn apply(&mut self, action: DashboardAction) -> Result<DashboardEffect, DashboardError> {
        self.controller.apply(action)
    }

    /// Runs an effect and returns the action reporting its outcome.
    pub async fn perform(&self, effect: DashboardEffect) -> Option<DashboardAction> {
        match effect {
            DashboardEffect::None => None,
            DashboardEffect::AnalyzeDetailed(image) => Some(self.analyze(&image).await),
            DashboardEffect::SaveAnalysis(result) => {
                Some(match self.results.append_analysis(result) {
                    Ok(_) => DashboardAction::SaveCompleted,
                    Err(_) => DashboardAction::SaveFailed,
                })
            }
        }
    }

    /// Applies an action and runs any effect to completion.
    ///
    /// # Errors
    ///
    /// Returns the `DashboardError` if the action is rejected.
    pub async fn dispatch(&mut self, action: DashboardAction) -> Result<(), DashboardError> {
        let effect = self.controller.apply(action)?;
        if let Some(outcome) = self.perform(effect).await {
            self.controller.apply(outcome)?;
        }
        Ok(())
    }

    async fn analyze(&self, image: &SelectedImage) -> DashboardAction {
        let encoded = match encode_image(image.source()).await {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(image = image.label(), error = %e, "photo could not be read");
                return DashboardAction::AnalysisFailed {
                    message: IMAGE_UNREADABLE_MESSAGE.to_string(),
                };
            }
        };

        match self
            .client
            .analyze_detailed_skin(&encoded.data, &encoded.mime_type)
            .await
        {
            Ok(result) => DashboardAction::AnalysisSucceeded(result),
            Err(e) => DashboardAction::AnalysisFailed {
                message: e.message().to_string(),
            },
        }
    }
}
