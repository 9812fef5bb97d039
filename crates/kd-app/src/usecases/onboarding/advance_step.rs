use std::sync::Arc;

use kd_core::{OnboardingStep, StepAnswer, ValidationError};

use super::OnboardingDraftStore;

/// Use case for submitting one onboarding step.
///
/// Validation failures stay at the offending step; they never reach the
/// session gate.
pub struct AdvanceOnboardingStep {
    drafts: Arc<OnboardingDraftStore>,
}

impl AdvanceOnboardingStep {
    pub fn new(drafts: Arc<OnboardingDraftStore>) -> Self {
        Self { drafts }
    }

    /// Validate and merge `answer`, returning the step to show next.
    pub async fn execute(&self, answer: StepAnswer) -> Result<OnboardingStep, ValidationError> {
        self.drafts.apply(answer).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kd_core::Gender;

    #[tokio::test]
    async fn test_execute_rejects_invalid_answer_and_keeps_draft() {
        let drafts = Arc::new(OnboardingDraftStore::new());
        let use_case = AdvanceOnboardingStep::new(drafts.clone());

        let err = use_case
            .execute(StepAnswer::PersonalInfo {
                age: 150,
                gender: Gender::Other,
                phone_number: "9876543210".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ValidationError::OutOfRange { field: "age", .. }));
        assert_eq!(
            drafts.first_unanswered_step().await,
            OnboardingStep::PersonalInfo
        );
    }
}
