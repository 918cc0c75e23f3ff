//! Inference Service Adapters.
//!
//! - `GeminiProvider` - Google Gemini `generateContent` over HTTPS
//! - `MockInferenceService` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockInferenceService, MockResponse};
