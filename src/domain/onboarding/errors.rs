//! Errors for rejected onboarding actions.

use thiserror::Error;

use super::OnboardingStep;
use crate::domain::foundation::ValidationError;

/// Why an action was not applied. The workflow state is unchanged whenever
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Action '{action}' is not valid in step {step:?}")]
    InvalidAction {
        action: &'static str,
        step: OnboardingStep,
    },

    #[error("Profile is incomplete: {0}")]
    InvalidProfile(#[from] ValidationError),

    #[error("No image has been selected")]
    NoImageSelected,

    #[error("An analysis request is already outstanding")]
    RequestInFlight,
}

impl WorkflowError {
    pub fn invalid_action(action: &'static str, step: OnboardingStep) -> Self {
        Self::InvalidAction { action, step }
    }
}
