//! A detailed analysis the user chose to keep.

use serde::{Deserialize, Serialize};

use super::DetailedAnalysisResult;
use crate::domain::foundation::Timestamp;

/// Detailed result plus the moment it was saved.
///
/// Serialized flat (`{...result, "savedAt": ...}`) so the stored list stays
/// readable by the web build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAnalysisRecord {
    #[serde(flatten)]
    pub result: DetailedAnalysisResult,
    pub saved_at: Timestamp,
}

impl SavedAnalysisRecord {
    pub fn new(result: DetailedAnalysisResult, saved_at: Timestamp) -> Self {
        Self { result, saved_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_flat_with_saved_at() {
        let json = r#"{
            "analysis": "ok",
            "potentialIssues": [],
            "recommendations": [],
            "disclaimer": "d",
            "savedAt": "2024-03-01T08:00:00Z"
        }"#;

        let record: SavedAnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.result.analysis, "ok");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["savedAt"], "2024-03-01T08:00:00Z");
        assert_eq!(value["disclaimer"], "d");
        assert!(value.get("result").is_none());
    }
}
