//! Application layer - services and coordinators.
//!
//! Coordinators own a state machine, run the effects it emits through the
//! ports, and feed the outcomes back in as actions.

mod analysis_client;
mod dashboard_session;
mod onboarding_session;
mod result_store;
pub mod schema;

pub use analysis_client::{
    AnalysisClient, AnalysisError, DETAILED_FAILURE_MESSAGE, ONBOARDING_FAILURE_MESSAGE,
};
pub use dashboard_session::DashboardSession;
pub use onboarding_session::OnboardingSession;
pub use result_store::{PersistenceError, ResultStore, SAVED_ANALYSES_KEY};

/// Shown when the selected photo cannot be read back for encoding.
pub const IMAGE_UNREADABLE_MESSAGE: &str =
    "We couldn't read that photo. Please choose another one.";
