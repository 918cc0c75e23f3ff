//! Onboarding module - first-run flow from welcome to dashboard.

mod errors;
mod step;
mod workflow;

pub use errors::WorkflowError;
pub use step::OnboardingStep;
pub use workflow::{OnboardingAction, OnboardingEffect, OnboardingView, OnboardingWorkflow};
