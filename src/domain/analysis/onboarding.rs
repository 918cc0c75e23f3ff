//! Result of the quick selfie scan performed during onboarding.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Fewest concerns the onboarding scan reports.
pub const MIN_TOP_CONCERNS: usize = 1;

/// Most concerns the onboarding scan reports.
pub const MAX_TOP_CONCERNS: usize = 2;

/// Basic skin type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Normal => "Normal",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visible concern picked out of the selfie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinConcern {
    pub name: String,
    pub description: String,
}

impl SkinConcern {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Onboarding scan outcome.
///
/// Field names match the declared response shape exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnalysisResult {
    pub skin_type: SkinType,
    pub top_concerns: Vec<SkinConcern>,
    pub summary: String,
}

impl OnboardingAnalysisResult {
    /// Checks the invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `top_concerns` does not hold 1-2 entries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let count = self.top_concerns.len();
        if !(MIN_TOP_CONCERNS..=MAX_TOP_CONCERNS).contains(&count) {
            return Err(ValidationError::out_of_range(
                "topConcerns",
                MIN_TOP_CONCERNS,
                MAX_TOP_CONCERNS,
                count,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_declared_shape() {
        let result: OnboardingAnalysisResult = serde_json::from_str(
            r#"{"skinType":"Oily","topConcerns":[{"name":"Acne","description":"desc"}],"summary":"s"}"#,
        )
        .unwrap();

        assert_eq!(result.skin_type, SkinType::Oily);
        assert_eq!(result.top_concerns, vec![SkinConcern::new("Acne", "desc")]);
        assert_eq!(result.summary, "s");
        assert!(result.validate().is_ok());
    }

    #[test]
    fn unknown_skin_type_fails_to_parse() {
        let parsed = serde_json::from_str::<OnboardingAnalysisResult>(
            r#"{"skinType":"Sensitive","topConcerns":[],"summary":"s"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_summary_fails_to_parse() {
        let parsed = serde_json::from_str::<OnboardingAnalysisResult>(
            r#"{"skinType":"Dry","topConcerns":[{"name":"a","description":"b"}]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_rejects_wrong_concern_count() {
        let mut result = OnboardingAnalysisResult {
            skin_type: SkinType::Normal,
            top_concerns: vec![],
            summary: "fine".to_string(),
        };
        assert!(result.validate().is_err());

        result.top_concerns = vec![
            SkinConcern::new("a", "a"),
            SkinConcern::new("b", "b"),
            SkinConcern::new("c", "c"),
        ];
        assert_eq!(
            result.validate().unwrap_err(),
            ValidationError::out_of_range("topConcerns", 1, 2, 3)
        );
    }
}
