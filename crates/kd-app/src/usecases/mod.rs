//! Use cases for the session core
//!
//! This module contains the session gate service plus use cases for the
//! auth screens and the onboarding flow.

pub mod auth;
pub mod onboarding;
pub mod session;

pub use auth::{ResetPassword, SignIn, SignOut, SignUp};
pub use onboarding::{AdvanceOnboardingStep, CompleteOnboarding, OnboardingDraftStore};
pub use session::SessionGate;
