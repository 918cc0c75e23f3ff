//! Enumerated lifestyle answers captured during onboarding.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Goals offered by the profile form. Free-text goals are also accepted.
pub const SUGGESTED_GOALS: [&str; 6] = [
    "Reduce Acne",
    "Minimize Pores",
    "Even Skin Tone",
    "Reduce Fine Lines",
    "Improve Hydration",
    "Control Oiliness",
];

/// How much sun the user typically gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SunExposure {
    Low,
    #[default]
    Medium,
    High,
}

impl SunExposure {
    pub const ALL: [SunExposure; 3] = [SunExposure::Low, SunExposure::Medium, SunExposure::High];

    /// Label shown next to the option in the form.
    pub fn label(&self) -> &'static str {
        match self {
            SunExposure::Low => "Low (Mostly Indoors)",
            SunExposure::Medium => "Medium (Occasional Sun)",
            SunExposure::High => "High (Often Outdoors)",
        }
    }
}

impl fmt::Display for SunExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported average stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl StressLevel {
    pub const ALL: [StressLevel; 3] = [StressLevel::Low, StressLevel::Medium, StressLevel::High];
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_are_medium() {
        assert_eq!(SunExposure::default(), SunExposure::Medium);
        assert_eq!(StressLevel::default(), StressLevel::Medium);
    }

    #[test]
    fn sun_exposure_serializes_as_bare_level() {
        assert_eq!(serde_json::to_string(&SunExposure::Medium).unwrap(), "\"Medium\"");
        let parsed: SunExposure = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(parsed, SunExposure::High);
    }

    #[test]
    fn sun_exposure_labels_describe_the_level() {
        assert_eq!(SunExposure::Low.to_string(), "Low (Mostly Indoors)");
        assert_eq!(SunExposure::High.label(), "High (Often Outdoors)");
    }
}
