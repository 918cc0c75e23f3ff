//! AnalysisClient - sends an image to the inference service and decodes the
//! reply into a typed result.
//!
//! Every failure (transport, empty reply, malformed JSON, missing field,
//! unknown enum value, wrong concern count) collapses into one generic
//! user-facing `AnalysisError`. The underlying cause goes to the log only.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use super::schema::{detailed_schema, onboarding_schema, DETAILED_INSTRUCTION, ONBOARDING_INSTRUCTION};
use crate::domain::analysis::{DetailedAnalysisResult, OnboardingAnalysisResult};
use crate::ports::{InferenceRequest, InferenceService, InlineImage};

pub const ONBOARDING_FAILURE_MESSAGE: &str =
    "Failed to get initial analysis from AI. Please try again.";
pub const DETAILED_FAILURE_MESSAGE: &str = "Failed to get analysis from AI. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Safe to show to the user as-is.
    #[error("{message}")]
    AnalysisFailure { message: String },
}

impl AnalysisError {
    fn failure(message: &str) -> Self {
        Self::AnalysisFailure {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AnalysisError::AnalysisFailure { message } => message,
        }
    }
}

/// Strictly decodes a reply: surrounding whitespace is ignored, anything
/// else that does not match `T` exactly is an error.
fn decode_reply<T: DeserializeOwned>(reply: &str) -> Result<T, String> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err("empty reply".to_string());
    }
    serde_json::from_str(trimmed).map_err(|e| format!("reply does not match schema: {}", e))
}

pub struct AnalysisClient {
    inference: Arc<dyn InferenceService>,
}

impl AnalysisClient {
    pub fn new(inference: Arc<dyn InferenceService>) -> Self {
        Self { inference }
    }

    /// Quick scan of the onboarding selfie.
    ///
    /// # Errors
    ///
    /// `AnalysisFailure` with [`ONBOARDING_FAILURE_MESSAGE`] on any failure.
    pub async fn analyze_selfie_for_onboarding(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<OnboardingAnalysisResult, AnalysisError> {
        let result = self
            .request::<OnboardingAnalysisResult>(
                "onboarding",
                ONBOARDING_INSTRUCTION,
                onboarding_schema(),
                image_base64,
                mime_type,
            )
            .await
            .and_then(|result| {
                result
                    .validate()
                    .map(|_| result)
                    .map_err(|e| format!("reply violates constraints: {}", e))
            });

        result.map_err(|cause| {
            error!(kind = "onboarding", %cause, "Error analyzing onboarding selfie");
            AnalysisError::failure(ONBOARDING_FAILURE_MESSAGE)
        })
    }

    /// Detailed dashboard analysis.
    ///
    /// # Errors
    ///
    /// `AnalysisFailure` with [`DETAILED_FAILURE_MESSAGE`] on any failure.
    pub async fn analyze_detailed_skin(
        &self,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<DetailedAnalysisResult, AnalysisError> {
        self.request::<DetailedAnalysisResult>(
            "detailed",
            DETAILED_INSTRUCTION,
            detailed_schema(),
            image_base64,
            mime_type,
        )
        .await
        .map_err(|cause| {
            error!(kind = "detailed", %cause, "Error analyzing skin image");
            AnalysisError::failure(DETAILED_FAILURE_MESSAGE)
        })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        kind: &'static str,
        instruction: &str,
        schema: serde_json::Value,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<T, String> {
        let provider = self.inference.provider_info();
        info!(
            kind,
            provider = %provider.name,
            model = %provider.model,
            mime_type,
            "requesting skin analysis"
        );

        let request = InferenceRequest::new(
            instruction,
            InlineImage::new(image_base64, mime_type),
            schema,
        );

        let reply = self.inference.generate(request).await.map_err(|e| {
            format!(
                "inference call failed (retryable: {}): {}",
                e.is_retryable(),
                e
            )
        })?;

        decode_reply(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockInferenceService;
    use crate::domain::analysis::{SkinType, Severity};
    use crate::ports::InferenceError;

    const ONBOARDING_REPLY: &str = r#"
        {"skinType":"Oily","topConcerns":[{"name":"Acne","description":"Breakouts on the chin."}],"summary":"Very manageable!"}
    "#;

    fn client(mock: &MockInferenceService) -> AnalysisClient {
        AnalysisClient::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn onboarding_reply_is_decoded_after_trimming() {
        let mock = MockInferenceService::new().with_reply(ONBOARDING_REPLY);

        let result = client(&mock)
            .analyze_selfie_for_onboarding("aGk=", "image/jpeg")
            .await
            .unwrap();

        assert_eq!(result.skin_type, SkinType::Oily);
        assert_eq!(result.top_concerns.len(), 1);
    }

    #[tokio::test]
    async fn request_carries_instruction_image_and_schema() {
        let mock = MockInferenceService::new().with_reply(ONBOARDING_REPLY);

        client(&mock)
            .analyze_selfie_for_onboarding("aGk=", "image/png")
            .await
            .unwrap();

        let calls = mock.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].instruction, ONBOARDING_INSTRUCTION);
        assert_eq!(calls[0].image, InlineImage::new("aGk=", "image/png"));
        assert_eq!(calls[0].response_schema, onboarding_schema());
    }

    #[tokio::test]
    async fn too_many_concerns_is_generic_failure() {
        let mock = MockInferenceService::new().with_reply(
            r#"{"skinType":"Dry","topConcerns":[
                {"name":"a","description":"a"},
                {"name":"b","description":"b"},
                {"name":"c","description":"c"}],"summary":"s"}"#,
        );

        let err = client(&mock)
            .analyze_selfie_for_onboarding("aGk=", "image/jpeg")
            .await
            .unwrap_err();

        assert_eq!(err.message(), ONBOARDING_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn zero_concerns_is_generic_failure() {
        let mock = MockInferenceService::new()
            .with_reply(r#"{"skinType":"Dry","topConcerns":[],"summary":"s"}"#);

        assert!(client(&mock)
            .analyze_selfie_for_onboarding("aGk=", "image/jpeg")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn unknown_skin_type_is_generic_failure() {
        let mock = MockInferenceService::new().with_reply(
            r#"{"skinType":"Sensitive","topConcerns":[{"name":"a","description":"a"}],"summary":"s"}"#,
        );

        assert!(client(&mock)
            .analyze_selfie_for_onboarding("aGk=", "image/jpeg")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn missing_field_is_generic_failure() {
        let mock = MockInferenceService::new()
            .with_reply(r#"{"analysis":"ok","potentialIssues":[],"recommendations":[]}"#);

        let err = client(&mock)
            .analyze_detailed_skin("aGk=", "image/jpeg")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), DETAILED_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn non_json_and_empty_replies_fail() {
        let mock = MockInferenceService::new()
            .with_reply("```json\n{}\n```")
            .with_reply("   ");
        let client = client(&mock);

        assert!(client.analyze_detailed_skin("aGk=", "image/jpeg").await.is_err());
        assert!(client.analyze_detailed_skin("aGk=", "image/jpeg").await.is_err());
    }

    #[tokio::test]
    async fn transport_error_is_generic_failure() {
        let mock = MockInferenceService::new().with_error(InferenceError::AuthenticationFailed);

        let err = client(&mock)
            .analyze_detailed_skin("aGk=", "image/jpeg")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            AnalysisError::AnalysisFailure {
                message: DETAILED_FAILURE_MESSAGE.to_string()
            }
        );
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn detailed_reply_is_decoded() {
        let mock = MockInferenceService::new().with_reply(
            r#"{"analysis":"Healthy","potentialIssues":[{"name":"Redness","description":"cheeks","severity":"High"}],
                "recommendations":[{"title":"SPF","details":"daily","category":"Routine"}],"disclaimer":"d"}"#,
        );

        let result = client(&mock)
            .analyze_detailed_skin("aGk=", "image/webp")
            .await
            .unwrap();

        assert_eq!(result.max_severity(), Some(Severity::High));
        assert_eq!(mock.get_calls()[0].instruction, DETAILED_INSTRUCTION);
    }
}
