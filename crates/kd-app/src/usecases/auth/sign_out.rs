use std::sync::Arc;

use tracing::debug;

use kd_core::ports::{AuthError, AuthPort};

use crate::usecases::onboarding::OnboardingDraftStore;

/// Use case for signing out.
///
/// Clears the onboarding draft after the backend sign-out so a later
/// account never resumes another user's answers. The resulting auth event
/// drives the gate back to Login.
pub struct SignOut {
    auth: Arc<dyn AuthPort>,
    drafts: Arc<OnboardingDraftStore>,
}

impl SignOut {
    pub fn new(auth: Arc<dyn AuthPort>, drafts: Arc<OnboardingDraftStore>) -> Self {
        Self { auth, drafts }
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        self.auth.sign_out().await?;
        self.drafts.clear().await;
        debug!("signed out, onboarding draft cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use kd_core::ports::AuthStateChange;
    use kd_core::{Gender, OnboardingStep, StepAnswer, UserId};
    use tokio::sync::mpsc;

    struct MockAuthPort;

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn current_identity(&self) -> Option<UserId> {
            None
        }

        async fn subscribe(&self) -> mpsc::Receiver<AuthStateChange> {
            let (_tx, rx) = mpsc::channel(1);
            rx
        }

        async fn sign_in(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn sign_up(
            &self,
            _email: &str,
            _password: &str,
            _display_name: Option<&str>,
        ) -> Result<(), AuthError> {
            Ok(())
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }

        async fn reset_password(&self, _email: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_execute_clears_partial_draft() {
        let drafts = Arc::new(OnboardingDraftStore::new());
        drafts
            .apply(StepAnswer::PersonalInfo {
                age: 35,
                gender: Gender::Male,
                phone_number: "9876543210".to_string(),
            })
            .await
            .expect("valid answer");

        let use_case = SignOut::new(Arc::new(MockAuthPort), drafts.clone());
        use_case.execute().await.expect("sign out");

        assert_eq!(
            drafts.first_unanswered_step().await,
            OnboardingStep::PersonalInfo
        );
    }
}
