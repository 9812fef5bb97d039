//! Process-wide onboarding draft store.
//!
//! The single owner of the in-memory draft shared across onboarding steps.
//! Cleared on completion or logout; never persisted.

use tokio::sync::Mutex;

use kd_core::{OnboardingDraft, OnboardingSequencer, OnboardingStep, StepAnswer, ValidationError};

pub struct OnboardingDraftStore {
    draft: Mutex<OnboardingDraft>,
}

impl OnboardingDraftStore {
    pub fn new() -> Self {
        Self {
            draft: Mutex::new(OnboardingDraft::default()),
        }
    }

    /// Current draft contents.
    pub async fn snapshot(&self) -> OnboardingDraft {
        self.draft.lock().await.clone()
    }

    /// Earliest step still missing required answers.
    pub async fn first_unanswered_step(&self) -> OnboardingStep {
        self.draft.lock().await.first_unanswered_step()
    }

    /// Validate `answer` and merge it into the draft, returning the step to
    /// show next. A failed validation leaves the draft untouched.
    pub async fn apply(&self, answer: StepAnswer) -> Result<OnboardingStep, ValidationError> {
        let mut draft = self.draft.lock().await;
        OnboardingSequencer::apply(&mut draft, answer)
    }

    pub async fn add_seasonal_crop(&self, crop: &str) -> Result<(), ValidationError> {
        self.draft.lock().await.add_seasonal_crop(crop)
    }

    pub async fn remove_seasonal_crop(&self, crop: &str) {
        self.draft.lock().await.remove_seasonal_crop(crop);
    }

    /// Drop all accumulated answers.
    pub async fn clear(&self) {
        *self.draft.lock().await = OnboardingDraft::default();
    }
}

impl Default for OnboardingDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kd_core::Gender;

    #[tokio::test]
    async fn test_apply_merges_into_shared_draft() {
        let store = OnboardingDraftStore::new();
        let next = store
            .apply(StepAnswer::PersonalInfo {
                age: 35,
                gender: Gender::Male,
                phone_number: "9876543210".to_string(),
            })
            .await
            .expect("valid answer");

        assert_eq!(next, OnboardingStep::Location);
        assert_eq!(store.snapshot().await.age, Some(35));
        assert_eq!(store.first_unanswered_step().await, OnboardingStep::Location);
    }

    #[tokio::test]
    async fn test_clear_resets_draft() {
        let store = OnboardingDraftStore::new();
        store
            .apply(StepAnswer::PersonalInfo {
                age: 35,
                gender: Gender::Male,
                phone_number: "9876543210".to_string(),
            })
            .await
            .expect("valid answer");

        store.clear().await;

        assert_eq!(store.snapshot().await, OnboardingDraft::default());
        assert_eq!(
            store.first_unanswered_step().await,
            OnboardingStep::PersonalInfo
        );
    }
}
