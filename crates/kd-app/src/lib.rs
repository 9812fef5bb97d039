//! Kissan Dost Application Orchestration Layer
//!
//! This crate contains the session gate runtime and the use cases that
//! drive authentication and onboarding.

pub mod usecases;

pub use usecases::{
    AdvanceOnboardingStep, CompleteOnboarding, OnboardingDraftStore, ResetPassword, SessionGate,
    SignIn, SignOut, SignUp,
};
