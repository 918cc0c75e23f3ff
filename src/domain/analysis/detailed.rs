//! Result of the detailed dashboard analysis.

use serde::{Deserialize, Serialize};

/// Estimated severity of a potential issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Kind of action a recommendation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Product,
    Lifestyle,
    Routine,
}

/// A skin issue the model believes is visible in the photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialIssue {
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub details: String,
    pub category: RecommendationCategory,
}

/// Detailed analysis outcome, transient unless the user saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysisResult {
    pub analysis: String,
    pub potential_issues: Vec<PotentialIssue>,
    pub recommendations: Vec<Recommendation>,
    pub disclaimer: String,
}

impl DetailedAnalysisResult {
    /// Highest severity among the reported issues, if any.
    pub fn max_severity(&self) -> Option<Severity> {
        self.potential_issues.iter().map(|i| i.severity).max()
    }

    /// Recommendations of one category, in reported order.
    pub fn recommendations_in(
        &self,
        category: RecommendationCategory,
    ) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |r| r.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "analysis": "Overall healthy skin with some redness.",
        "potentialIssues": [
            {"name": "Redness", "description": "Around the nose", "severity": "Medium"},
            {"name": "Dryness", "description": "Flaky patches", "severity": "Low"}
        ],
        "recommendations": [
            {"title": "Use SPF", "details": "Daily SPF 30+", "category": "Product"},
            {"title": "Sleep more", "details": "7-8 hours", "category": "Lifestyle"},
            {"title": "Moisturize", "details": "Twice a day", "category": "Product"}
        ],
        "disclaimer": "Not medical advice."
    }"#;

    #[test]
    fn deserializes_declared_shape() {
        let result: DetailedAnalysisResult = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(result.potential_issues.len(), 2);
        assert_eq!(result.potential_issues[0].severity, Severity::Medium);
        assert_eq!(result.recommendations[1].category, RecommendationCategory::Lifestyle);
        assert_eq!(result.disclaimer, "Not medical advice.");
    }

    #[test]
    fn serializes_camel_case_fields() {
        let result: DetailedAnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert!(value.get("potentialIssues").is_some());
        assert!(value.get("potential_issues").is_none());
        assert_eq!(value["recommendations"][0]["category"], "Product");
    }

    #[test]
    fn invalid_severity_fails_to_parse() {
        let broken = SAMPLE.replace("\"Medium\"", "\"Severe\"");
        assert!(serde_json::from_str::<DetailedAnalysisResult>(&broken).is_err());
    }

    #[test]
    fn max_severity_and_category_filter() {
        let result: DetailedAnalysisResult = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(result.max_severity(), Some(Severity::Medium));
        let titles: Vec<_> = result
            .recommendations_in(RecommendationCategory::Product)
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Use SPF", "Moisturize"]);
    }
}
