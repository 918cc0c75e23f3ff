//! Analysis module - typed results returned by the inference service.
//!
//! Both result shapes mirror the declared response schemas field-for-field;
//! see [`crate::application::schema`] for the schemas themselves.

mod detailed;
mod onboarding;
mod routine;
mod saved;

pub use detailed::{
    DetailedAnalysisResult, PotentialIssue, Recommendation, RecommendationCategory, Severity,
};
pub use onboarding::{
    OnboardingAnalysisResult, SkinConcern, SkinType, MAX_TOP_CONCERNS, MIN_TOP_CONCERNS,
};
pub use routine::{RoutineStep, StarterRoutine};
pub use saved::SavedAnalysisRecord;
