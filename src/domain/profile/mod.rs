//! Profile module - lifestyle answers captured at the start of onboarding.

mod user_profile;
mod values;

pub use user_profile::{ProfileForm, UserProfile, MAX_GOALS, MIN_GOALS};
pub use values::{StressLevel, SunExposure, SUGGESTED_GOALS};
