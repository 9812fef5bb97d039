//! Onboarding use cases
//!
//! This module contains the process-wide draft store plus use cases for
//! advancing through the questionnaire and submitting the finished draft.

pub mod advance_step;
pub mod complete;
pub mod draft_store;

pub use advance_step::AdvanceOnboardingStep;
pub use complete::{CompleteOnboarding, CompleteOnboardingError};
pub use draft_store::OnboardingDraftStore;
