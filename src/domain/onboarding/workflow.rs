//! Onboarding workflow - the first-run flow as an explicit state value.
//!
//! All transition logic lives in [`OnboardingWorkflow::apply`]. The rendering
//! layer reads [`OnboardingWorkflow::view`] and sends actions back; anything
//! that has to suspend (reading and analyzing the selfie) is returned as an
//! [`OnboardingEffect`] for the caller to run, whose outcome comes back as
//! another action.
//!
//! # Invariants
//!
//! - exactly one step is active
//! - the error slot is cleared on every action and only populated when an
//!   analysis request fails
//! - `request_in_flight` is true exactly while the step is `Analyzing`
//! - entering `Analyzing` keeps the profile but drops any earlier result

use tracing::debug;

use super::{OnboardingStep, WorkflowError};
use crate::domain::analysis::{OnboardingAnalysisResult, StarterRoutine};
use crate::domain::image::SelectedImage;
use crate::domain::profile::{ProfileForm, UserProfile};

/// User or I/O-completion event fed into the workflow.
#[derive(Debug, Clone)]
pub enum OnboardingAction {
    Start,
    SubmitProfile(ProfileForm),
    SelectImage(SelectedImage),
    SubmitImage,
    AnalysisSucceeded(OnboardingAnalysisResult),
    /// The inference call failed; the selected image is kept for a retry.
    AnalysisFailed { message: String },
    /// The image could not be read; the user has to pick another one.
    ImageUnreadable { message: String },
    Continue,
    ContinueToDashboard,
}

impl OnboardingAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::SubmitProfile(_) => "submit_profile",
            Self::SelectImage(_) => "select_image",
            Self::SubmitImage => "submit_image",
            Self::AnalysisSucceeded(_) => "analysis_succeeded",
            Self::AnalysisFailed { .. } => "analysis_failed",
            Self::ImageUnreadable { .. } => "image_unreadable",
            Self::Continue => "continue",
            Self::ContinueToDashboard => "continue_to_dashboard",
        }
    }
}

/// Work the caller must perform after an accepted action.
#[derive(Debug, Clone)]
pub enum OnboardingEffect {
    None,
    /// Read, encode and analyze the selfie, then report back with
    /// `AnalysisSucceeded`, `AnalysisFailed` or `ImageUnreadable`.
    AnalyzeSelfie(SelectedImage),
}

#[derive(Debug, Clone)]
enum Stage {
    Welcome,
    ProfileCapture,
    SelfieCapture { image: Option<SelectedImage> },
    Analyzing { image: SelectedImage },
    OnboardingResult { result: OnboardingAnalysisResult },
    RoutineSuggestion { result: OnboardingAnalysisResult },
    Dashboard,
}

/// What the rendering layer needs for the current step.
#[derive(Debug, Clone)]
pub enum OnboardingView<'a> {
    Welcome,
    ProfileCapture,
    SelfieCapture {
        selected_image: Option<&'a SelectedImage>,
        error: Option<&'a str>,
        can_submit: bool,
    },
    Analyzing,
    OnboardingResult {
        result: &'a OnboardingAnalysisResult,
    },
    RoutineSuggestion {
        result: &'a OnboardingAnalysisResult,
        routine: StarterRoutine,
    },
    Dashboard,
}

/// The onboarding state machine for one session.
#[derive(Debug, Clone)]
pub struct OnboardingWorkflow {
    stage: Stage,
    profile: Option<UserProfile>,
    error: Option<String>,
    request_in_flight: bool,
}

impl Default for OnboardingWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWorkflow {
    pub fn new() -> Self {
        Self {
            stage: Stage::Welcome,
            profile: None,
            error: None,
            request_in_flight: false,
        }
    }

    /// The active step.
    pub fn step(&self) -> OnboardingStep {
        match self.stage {
            Stage::Welcome => OnboardingStep::Welcome,
            Stage::ProfileCapture => OnboardingStep::ProfileCapture,
            Stage::SelfieCapture { .. } => OnboardingStep::SelfieCapture,
            Stage::Analyzing { .. } => OnboardingStep::Analyzing,
            Stage::OnboardingResult { .. } => OnboardingStep::OnboardingResult,
            Stage::RoutineSuggestion { .. } => OnboardingStep::RoutineSuggestion,
            Stage::Dashboard => OnboardingStep::Dashboard,
        }
    }

    /// Profile captured in `ProfileCapture`, kept for the rest of the session.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Result of the onboarding scan, while it is being shown.
    pub fn result(&self) -> Option<&OnboardingAnalysisResult> {
        match &self.stage {
            Stage::OnboardingResult { result } | Stage::RoutineSuggestion { result } => {
                Some(result)
            }
            _ => None,
        }
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        match &self.stage {
            Stage::SelfieCapture { image } => image.as_ref(),
            Stage::Analyzing { image } => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while an analysis request is outstanding; submit controls must
    /// be disabled.
    pub fn is_request_in_flight(&self) -> bool {
        self.request_in_flight
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.stage, Stage::Dashboard)
    }

    /// Projection for the rendering layer.
    pub fn view(&self) -> OnboardingView<'_> {
        match &self.stage {
            Stage::Welcome => OnboardingView::Welcome,
            Stage::ProfileCapture => OnboardingView::ProfileCapture,
            Stage::SelfieCapture { image } => OnboardingView::SelfieCapture {
                selected_image: image.as_ref(),
                error: self.error.as_deref(),
                can_submit: image.is_some() && !self.request_in_flight,
            },
            Stage::Analyzing { .. } => OnboardingView::Analyzing,
            Stage::OnboardingResult { result } => OnboardingView::OnboardingResult { result },
            Stage::RoutineSuggestion { result } => OnboardingView::RoutineSuggestion {
                result,
                routine: StarterRoutine::for_skin_type(result.skin_type),
            },
            Stage::Dashboard => OnboardingView::Dashboard,
        }
    }

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError` when the action is not valid for the current
    /// step or its guard fails; the step and its payload are left untouched.
    pub fn apply(&mut self, action: OnboardingAction) -> Result<OnboardingEffect, WorkflowError> {
        let from = self.step();
        let name = action.name();
        self.error = None;

        let outcome = self.dispatch(action);
        match &outcome {
            Ok(_) => debug!(action = name, ?from, to = ?self.step(), "onboarding transition"),
            Err(err) => debug!(action = name, step = ?from, error = %err, "onboarding action rejected"),
        }
        outcome
    }

    fn dispatch(&mut self, action: OnboardingAction) -> Result<OnboardingEffect, WorkflowError> {
        use OnboardingAction as A;

        match (&self.stage, action) {
            (Stage::Welcome, A::Start) => {
                self.stage = Stage::ProfileCapture;
            }
            (Stage::ProfileCapture, A::SubmitProfile(form)) => {
                let profile = UserProfile::try_from(form)?;
                self.profile = Some(profile);
                self.stage = Stage::SelfieCapture { image: None };
            }
            (Stage::SelfieCapture { .. }, A::SelectImage(image)) => {
                self.stage = Stage::SelfieCapture { image: Some(image) };
            }
            (Stage::SelfieCapture { image }, A::SubmitImage) => {
                let image = image.clone().ok_or(WorkflowError::NoImageSelected)?;
                self.request_in_flight = true;
                self.stage = Stage::Analyzing {
                    image: image.clone(),
                };
                return Ok(OnboardingEffect::AnalyzeSelfie(image));
            }
            (Stage::Analyzing { .. }, A::SubmitImage | A::SelectImage(_)) => {
                return Err(WorkflowError::RequestInFlight);
            }
            (Stage::Analyzing { .. }, A::AnalysisSucceeded(result)) => {
                self.request_in_flight = false;
                self.stage = Stage::OnboardingResult { result };
            }
            (Stage::Analyzing { image }, A::AnalysisFailed { message }) => {
                let image = image.clone();
                self.request_in_flight = false;
                self.error = Some(message);
                self.stage = Stage::SelfieCapture { image: Some(image) };
            }
            (Stage::Analyzing { .. }, A::ImageUnreadable { message }) => {
                self.request_in_flight = false;
                self.error = Some(message);
                self.stage = Stage::SelfieCapture { image: None };
            }
            (Stage::OnboardingResult { result }, A::Continue) => {
                let result = result.clone();
                self.stage = Stage::RoutineSuggestion { result };
            }
            (Stage::RoutineSuggestion { .. }, A::ContinueToDashboard) => {
                self.stage = Stage::Dashboard;
            }
            (_, action) => {
                return Err(WorkflowError::invalid_action(action.name(), self.step()));
            }
        }

        Ok(OnboardingEffect::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::image::InMemoryImageSource;
    use crate::domain::analysis::{SkinConcern, SkinType};
    use crate::domain::foundation::StateMachine;
    use crate::domain::profile::{StressLevel, SunExposure};

    fn valid_form() -> ProfileForm {
        ProfileForm {
            age: "28".to_string(),
            goals: vec!["Reduce Acne".to_string()],
            sun_exposure: SunExposure::Medium,
            stress_level: StressLevel::Low,
        }
    }

    fn selfie() -> SelectedImage {
        SelectedImage::new(InMemoryImageSource::new("selfie.jpg", "image/jpeg", vec![1, 2, 3]))
    }

    fn oily_result() -> OnboardingAnalysisResult {
        OnboardingAnalysisResult {
            skin_type: SkinType::Oily,
            top_concerns: vec![SkinConcern::new("Acne", "desc")],
            summary: "s".to_string(),
        }
    }

    fn at_selfie_capture() -> OnboardingWorkflow {
        let mut workflow = OnboardingWorkflow::new();
        workflow.apply(OnboardingAction::Start).unwrap();
        workflow
            .apply(OnboardingAction::SubmitProfile(valid_form()))
            .unwrap();
        workflow
    }

    fn analyzing() -> OnboardingWorkflow {
        let mut workflow = at_selfie_capture();
        workflow.apply(OnboardingAction::SelectImage(selfie())).unwrap();
        workflow.apply(OnboardingAction::SubmitImage).unwrap();
        workflow
    }

    #[test]
    fn starts_at_welcome() {
        let workflow = OnboardingWorkflow::new();
        assert_eq!(workflow.step(), OnboardingStep::Welcome);
        assert!(workflow.profile().is_none());
        assert!(!workflow.is_request_in_flight());
    }

    #[test]
    fn valid_profile_advances_to_selfie_capture() {
        let workflow = at_selfie_capture();
        assert_eq!(workflow.step(), OnboardingStep::SelfieCapture);
        assert_eq!(workflow.profile().unwrap().age(), "28");
    }

    #[test]
    fn invalid_profile_is_a_no_op() {
        let mut workflow = OnboardingWorkflow::new();
        workflow.apply(OnboardingAction::Start).unwrap();

        let mut form = valid_form();
        form.goals.clear();
        for _ in 0..2 {
            let err = workflow
                .apply(OnboardingAction::SubmitProfile(form.clone()))
                .unwrap_err();
            assert!(matches!(err, WorkflowError::InvalidProfile(_)));
            assert_eq!(workflow.step(), OnboardingStep::ProfileCapture);
            assert!(workflow.profile().is_none());
            assert!(workflow.error().is_none());
        }
    }

    #[test]
    fn submit_without_image_is_rejected() {
        let mut workflow = at_selfie_capture();
        let err = workflow.apply(OnboardingAction::SubmitImage).unwrap_err();
        assert_eq!(err, WorkflowError::NoImageSelected);
        assert_eq!(workflow.step(), OnboardingStep::SelfieCapture);
    }

    #[test]
    fn submit_image_emits_exactly_one_analysis_effect() {
        let mut workflow = at_selfie_capture();
        workflow.apply(OnboardingAction::SelectImage(selfie())).unwrap();

        let effect = workflow.apply(OnboardingAction::SubmitImage).unwrap();
        assert!(matches!(effect, OnboardingEffect::AnalyzeSelfie(ref img) if img.label() == "selfie.jpg"));
        assert_eq!(workflow.step(), OnboardingStep::Analyzing);
        assert!(workflow.is_request_in_flight());

        let second = workflow.apply(OnboardingAction::SubmitImage).unwrap_err();
        assert_eq!(second, WorkflowError::RequestInFlight);
        assert_eq!(workflow.step(), OnboardingStep::Analyzing);
    }

    #[test]
    fn success_moves_to_result() {
        let mut workflow = analyzing();
        workflow
            .apply(OnboardingAction::AnalysisSucceeded(oily_result()))
            .unwrap();

        assert_eq!(workflow.step(), OnboardingStep::OnboardingResult);
        assert_eq!(workflow.result().unwrap().skin_type, SkinType::Oily);
        assert!(!workflow.is_request_in_flight());
    }

    #[test]
    fn failure_returns_to_selfie_capture_with_error_and_keeps_image() {
        let mut workflow = analyzing();
        workflow
            .apply(OnboardingAction::AnalysisFailed {
                message: "Failed to get initial analysis from AI. Please try again.".into(),
            })
            .unwrap();

        assert_eq!(workflow.step(), OnboardingStep::SelfieCapture);
        assert!(!workflow.error().unwrap().is_empty());
        assert!(workflow.result().is_none());
        assert!(workflow.selected_image().is_some());
        assert!(!workflow.is_request_in_flight());
        assert!(workflow.profile().is_some());
    }

    #[test]
    fn unreadable_image_forces_reselection() {
        let mut workflow = analyzing();
        workflow
            .apply(OnboardingAction::ImageUnreadable {
                message: "cannot read".into(),
            })
            .unwrap();

        assert_eq!(workflow.step(), OnboardingStep::SelfieCapture);
        assert!(workflow.selected_image().is_none());
        assert_eq!(
            workflow.apply(OnboardingAction::SubmitImage).unwrap_err(),
            WorkflowError::NoImageSelected
        );
    }

    #[test]
    fn error_slot_clears_on_next_action() {
        let mut workflow = analyzing();
        workflow
            .apply(OnboardingAction::AnalysisFailed { message: "boom".into() })
            .unwrap();
        assert_eq!(workflow.error(), Some("boom"));

        workflow.apply(OnboardingAction::SubmitImage).unwrap();
        assert!(workflow.error().is_none());
        assert_eq!(workflow.step(), OnboardingStep::Analyzing);
    }

    #[test]
    fn full_flow_reaches_dashboard_with_routine() {
        let mut workflow = analyzing();
        workflow
            .apply(OnboardingAction::AnalysisSucceeded(oily_result()))
            .unwrap();
        workflow.apply(OnboardingAction::Continue).unwrap();

        match workflow.view() {
            OnboardingView::RoutineSuggestion { result, routine } => {
                assert_eq!(result.skin_type, SkinType::Oily);
                assert_eq!(routine.steps[0].suggestion, "Foaming or Gel Cleanser");
            }
            other => panic!("unexpected view {:?}", other),
        }

        workflow.apply(OnboardingAction::ContinueToDashboard).unwrap();
        assert!(workflow.is_complete());
        assert!(workflow.step().is_terminal());
        assert!(workflow.result().is_none());
        assert!(workflow.profile().is_some());
    }

    #[test]
    fn out_of_step_actions_are_rejected_without_change() {
        let mut workflow = OnboardingWorkflow::new();
        let err = workflow.apply(OnboardingAction::Continue).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::invalid_action("continue", OnboardingStep::Welcome)
        );

        let err = workflow
            .apply(OnboardingAction::AnalysisSucceeded(oily_result()))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidAction { .. }));
        assert_eq!(workflow.step(), OnboardingStep::Welcome);
    }

    #[test]
    fn selfie_view_reports_submit_availability() {
        let mut workflow = at_selfie_capture();
        assert!(matches!(
            workflow.view(),
            OnboardingView::SelfieCapture { can_submit: false, .. }
        ));

        workflow.apply(OnboardingAction::SelectImage(selfie())).unwrap();
        assert!(matches!(
            workflow.view(),
            OnboardingView::SelfieCapture { can_submit: true, .. }
        ));
    }

    #[test]
    fn every_accepted_transition_follows_the_step_table() {
        let mut workflow = OnboardingWorkflow::new();
        let script = vec![
            OnboardingAction::Start,
            OnboardingAction::SubmitProfile(valid_form()),
            OnboardingAction::SelectImage(selfie()),
            OnboardingAction::SubmitImage,
            OnboardingAction::AnalysisFailed { message: "x".into() },
            OnboardingAction::SubmitImage,
            OnboardingAction::AnalysisSucceeded(oily_result()),
            OnboardingAction::Continue,
            OnboardingAction::ContinueToDashboard,
        ];

        for action in script {
            let before = workflow.step();
            workflow.apply(action).unwrap();
            let after = workflow.step();
            assert!(before == after || before.can_transition_to(&after));
        }
        assert_eq!(workflow.step(), OnboardingStep::Dashboard);
    }
}
