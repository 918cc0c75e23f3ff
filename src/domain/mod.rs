//! Domain layer - value types and state machines with no I/O.

pub mod analysis;
pub mod dashboard;
pub mod foundation;
pub mod image;
pub mod onboarding;
pub mod profile;
