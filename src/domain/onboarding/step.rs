//! Onboarding step enum and its transition table.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// One screen of the first-run flow.
///
/// `Analyzing` is transient: it is entered from `SelfieCapture` only and
/// always exits either forward to `OnboardingResult` or back to
/// `SelfieCapture`. `Dashboard` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    ProfileCapture,
    SelfieCapture,
    Analyzing,
    OnboardingResult,
    RoutineSuggestion,
    Dashboard,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 7] = [
        OnboardingStep::Welcome,
        OnboardingStep::ProfileCapture,
        OnboardingStep::SelfieCapture,
        OnboardingStep::Analyzing,
        OnboardingStep::OnboardingResult,
        OnboardingStep::RoutineSuggestion,
        OnboardingStep::Dashboard,
    ];
}

impl StateMachine for OnboardingStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OnboardingStep::*;
        matches!(
            (self, target),
            (Welcome, ProfileCapture)
                | (ProfileCapture, SelfieCapture)
                | (SelfieCapture, Analyzing)
                | (Analyzing, OnboardingResult)
                | (Analyzing, SelfieCapture)
                | (OnboardingResult, RoutineSuggestion)
                | (RoutineSuggestion, Dashboard)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OnboardingStep::*;
        match self {
            Welcome => vec![ProfileCapture],
            ProfileCapture => vec![SelfieCapture],
            SelfieCapture => vec![Analyzing],
            Analyzing => vec![OnboardingResult, SelfieCapture],
            OnboardingResult => vec![RoutineSuggestion],
            RoutineSuggestion => vec![Dashboard],
            Dashboard => vec![],
        }
    }
}
