//! UserProfile value object and the raw form it is built from.

use serde::{Deserialize, Serialize};

use super::{StressLevel, SunExposure};
use crate::domain::foundation::ValidationError;

/// Minimum number of goals a profile must carry.
pub const MIN_GOALS: usize = 1;

/// Maximum number of goals a profile may carry.
pub const MAX_GOALS: usize = 3;

/// Unvalidated answers as emitted by the profile capture screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub age: String,
    pub goals: Vec<String>,
    #[serde(default)]
    pub sun_exposure: SunExposure,
    #[serde(default)]
    pub stress_level: StressLevel,
}

impl ProfileForm {
    /// Toggles a goal the way the form's goal chips do: selecting a selected
    /// goal removes it, selecting a new one adds it unless the limit is hit.
    ///
    /// Returns true if the selection changed.
    pub fn toggle_goal(&mut self, goal: &str) -> bool {
        if let Some(pos) = self.goals.iter().position(|g| g == goal) {
            self.goals.remove(pos);
            return true;
        }
        if self.goals.len() >= MAX_GOALS {
            return false;
        }
        self.goals.push(goal.to_string());
        true
    }

    /// Whether the submit control should be enabled.
    pub fn is_submittable(&self) -> bool {
        UserProfile::try_from(self.clone()).is_ok()
    }
}

/// Lifestyle profile captured once during onboarding.
///
/// # Invariants
///
/// - `age` is non-blank text (kept as entered)
/// - `goals` holds 1-3 distinct, non-blank entries in selection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    age: String,
    goals: Vec<String>,
    sun_exposure: SunExposure,
    stress_level: StressLevel,
}

impl UserProfile {
    /// Builds a validated profile.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if age is blank
    /// - `InvalidFormat` if any goal is blank
    /// - `OutOfRange` if the distinct goal count is not 1-3
    pub fn new(
        age: impl Into<String>,
        goals: Vec<String>,
        sun_exposure: SunExposure,
        stress_level: StressLevel,
    ) -> Result<Self, ValidationError> {
        let age = age.into().trim().to_string();
        if age.is_empty() {
            return Err(ValidationError::empty_field("age"));
        }

        let mut distinct: Vec<String> = Vec::with_capacity(goals.len());
        for goal in goals {
            let goal = goal.trim().to_string();
            if goal.is_empty() {
                return Err(ValidationError::invalid_format("goals", "goal cannot be blank"));
            }
            if !distinct.contains(&goal) {
                distinct.push(goal);
            }
        }

        if !(MIN_GOALS..=MAX_GOALS).contains(&distinct.len()) {
            return Err(ValidationError::out_of_range(
                "goals",
                MIN_GOALS,
                MAX_GOALS,
                distinct.len(),
            ));
        }

        Ok(Self {
            age,
            goals: distinct,
            sun_exposure,
            stress_level,
        })
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn goals(&self) -> &[String] {
        &self.goals
    }

    pub fn sun_exposure(&self) -> SunExposure {
        self.sun_exposure
    }

    pub fn stress_level(&self) -> StressLevel {
        self.stress_level
    }
}

impl TryFrom<ProfileForm> for UserProfile {
    type Error = ValidationError;

    fn try_from(form: ProfileForm) -> Result<Self, Self::Error> {
        UserProfile::new(form.age, form.goals, form.sun_exposure, form.stress_level)
    }
}
