//! Inference Service Port - Interface for the generative AI endpoint.
//!
//! This port abstracts the one call the app makes to an AI provider: send an
//! inline image with a fixed instruction and a declared response shape, get
//! back the reply text. What model runs, how the request travels and how the
//! schema is enforced are the provider's business.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoService;
//!
//! #[async_trait]
//! impl InferenceService for EchoService {
//!     async fn generate(&self, _request: InferenceRequest) -> Result<String, InferenceError> {
//!         Ok(r#"{"skinType":"Oily","topConcerns":[],"summary":""}"#.to_string())
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for generative inference over a single image.
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Sends the instruction, image and response shape; returns the raw reply
    /// text, which is expected to be a JSON document matching the shape.
    async fn generate(&self, request: InferenceRequest) -> Result<String, InferenceError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Base64 image data sent inline with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    /// Standard base64 text without any data-URI header.
    pub data: String,
    pub mime_type: String,
}

impl InlineImage {
    pub fn new(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Request for a single inference call.
#[derive(Debug, Clone)]
pub struct InferenceRequest {
    /// Fixed instruction text.
    pub instruction: String,
    /// The image to analyze.
    pub image: InlineImage,
    /// Declared response shape the reply must conform to.
    pub response_schema: serde_json::Value,
}

impl InferenceRequest {
    pub fn new(
        instruction: impl Into<String>,
        image: InlineImage,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            image,
            response_schema,
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini").
    pub name: String,
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Inference service errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// The prompt or reply was blocked by the provider's safety filters.
    #[error("content filtered: {reason}")]
    ContentFiltered { reason: String },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response envelope.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl InferenceError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn content_filtered(reason: impl Into<String>) -> Self {
        Self::ContentFiltered {
            reason: reason.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying the same request later could succeed.
    ///
    /// Nothing in this crate retries; the flag is reported to operators so
    /// they can tell outages from bad requests.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InferenceError::RateLimited { .. }
                | InferenceError::Unavailable { .. }
                | InferenceError::Network(_)
                | InferenceError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_image_and_schema() {
        let request = InferenceRequest::new(
            "Describe the skin",
            InlineImage::new("aGVsbG8=", "image/png"),
            json!({"type": "OBJECT"}),
        );

        assert_eq!(request.instruction, "Describe the skin");
        assert_eq!(request.image.mime_type, "image/png");
        assert_eq!(request.response_schema["type"], "OBJECT");
    }

    #[test]
    fn inline_image_serializes_camel_case() {
        let value = serde_json::to_value(InlineImage::new("abc", "image/jpeg")).unwrap();
        assert_eq!(value, json!({"data": "abc", "mimeType": "image/jpeg"}));
    }

    #[test]
    fn retryable_classification() {
        assert!(InferenceError::rate_limited(30).is_retryable());
        assert!(InferenceError::unavailable("down").is_retryable());
        assert!(InferenceError::network("reset").is_retryable());
        assert!(InferenceError::Timeout { timeout_secs: 30 }.is_retryable());

        assert!(!InferenceError::AuthenticationFailed.is_retryable());
        assert!(!InferenceError::content_filtered("SAFETY").is_retryable());
        assert!(!InferenceError::parse("bad envelope").is_retryable());
        assert!(!InferenceError::InvalidRequest("bad".into()).is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            InferenceError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            InferenceError::content_filtered("SAFETY").to_string(),
            "content filtered: SAFETY"
        );
    }
}
