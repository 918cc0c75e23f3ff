//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary of the
//! SkinScan domain.

mod errors;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
