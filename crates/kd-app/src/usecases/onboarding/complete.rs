use std::sync::Arc;

use tracing::info;

use kd_core::ports::{ProfileLookupError, ProfileStorePort};
use kd_core::ValidationError;

use super::OnboardingDraftStore;
use crate::usecases::session::SessionGate;

/// Errors produced by the final onboarding submission.
#[derive(Debug, thiserror::Error)]
pub enum CompleteOnboardingError {
    #[error("not authenticated")]
    NotAuthenticated,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("profile write failed: {0}")]
    Store(#[from] ProfileLookupError),
}

/// Use case for completing onboarding.
///
/// Finalizes the draft into a complete profile, performs the single
/// document write, then re-resolves the session so the store round-trip,
/// not local optimism, flips the route to Main. A missing required field
/// fails before any write happens.
pub struct CompleteOnboarding {
    drafts: Arc<OnboardingDraftStore>,
    profile_store: Arc<dyn ProfileStorePort>,
    gate: Arc<SessionGate>,
}

impl CompleteOnboarding {
    pub fn new(
        drafts: Arc<OnboardingDraftStore>,
        profile_store: Arc<dyn ProfileStorePort>,
        gate: Arc<SessionGate>,
    ) -> Self {
        Self {
            drafts,
            profile_store,
            gate,
        }
    }

    pub async fn execute(&self) -> Result<(), CompleteOnboardingError> {
        let identity = self
            .gate
            .session()
            .await
            .identity
            .ok_or(CompleteOnboardingError::NotAuthenticated)?;

        let draft = self.drafts.snapshot().await;
        let profile = draft.finalize(identity)?;

        self.profile_store.create_profile(&profile).await?;
        self.drafts.clear().await;
        info!(user = %profile.user_id, "onboarding profile created");

        self.gate.refresh_onboarding().await;
        Ok(())
    }
}
