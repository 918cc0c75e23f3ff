//! OnboardingSession - drives the onboarding workflow and runs its effects.
//!
//! `dispatch` applies an action and, when the workflow asks for a selfie
//! analysis, encodes the image, calls the analysis client and feeds the
//! outcome back. Callers that need to render the in-flight state between the
//! two halves can use `apply` and `perform` separately.

use std::sync::Arc;
use tracing::warn;

use super::{AnalysisClient, IMAGE_UNREADABLE_MESSAGE};
use crate::adapters::image::encode_image;
use crate::domain::image::SelectedImage;
use crate::domain::onboarding::{
    OnboardingAction, OnboardingEffect, OnboardingView, OnboardingWorkflow, WorkflowError,
};

pub struct OnboardingSession {
    workflow: OnboardingWorkflow,
    client: Arc<AnalysisClient>,
}

impl OnboardingSession {
    pub fn new(client: Arc<AnalysisClient>) -> Self {
        Self {
            workflow: OnboardingWorkflow::new(),
            client,
        }
    }

    pub fn workflow(&self) -> &OnboardingWorkflow {
        &self.workflow
    }

    pub fn view(&self) -> OnboardingView<'_> {
        self.workflow.view()
    }

    /// Applies an action without running the resulting effect.
    pub fn apply(&mut self, action: OnboardingAction) -> Result<OnboardingEffect, WorkflowError> {
        self.workflow.apply(action)
    }

    /// Runs an effect and returns the action reporting its outcome.
    pub async fn perform(&self, effect: OnboardingEffect) -> Option<OnboardingAction> {
        match effect {
            OnboardingEffect::None => None,
            OnboardingEffect::AnalyzeSelfie(image) => Some(self.analyze(&image).await),
        }
    }

    /// Applies an action and runs any effect to completion.
    ///
    /// # Errors
    ///
    /// Returns the `WorkflowError` if the action is rejected; the workflow is
    /// unchanged in that case.
    pub async fn dispatch(&mut self, action: OnboardingAction) -> Result<(), WorkflowError> {
        let effect = self.workflow.apply(action)?;
        if let Some(outcome) = self.perform(effect).await {
            self.workflow.apply(outcome)?;
        }
        Ok(())
    }

    async fn analyze(&self, image: &SelectedImage) -> OnboardingAction {
        let encoded = match encode_image(image.source()).await {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(image = image.label(), error = %e, "selfie could not be read");
                return OnboardingAction::ImageUnreadable {
                    message: IMAGE_UNREADABLE_MESSAGE.to_string(),
                };
            }
        };

        match self
            .client
            .analyze_selfie_for_onboarding(&encoded.data, &encoded.mime_type)
            .await
        {
            Ok(result) => OnboardingAction::AnalysisSucceeded(result),
            Err(e) => OnboardingAction::AnalysisFailed {
                message: e.message().to_string(),
            },
        }
    }
}
