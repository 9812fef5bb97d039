//! # kd-core
//!
//! Core domain models and business logic for the Kissan Dost session core.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ids;
pub mod onboarding;
pub mod ports;
pub mod profile;
pub mod session;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, GateConfig};
pub use ids::UserId;
pub use onboarding::{
    OnboardingDraft, OnboardingSequencer, OnboardingStep, StepAnswer, ValidationError,
};
pub use profile::{Gender, GeoLocation, PesticidePreference, SoilType, UserProfile};
pub use session::{GateState, Route, Session};
