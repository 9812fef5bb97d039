//! Onboarding domain models
//!
//! This module defines the onboarding step sequence, the draft accumulator
//! shared across steps, and the pure sequencer that validates and merges
//! step answers. The draft is written out exactly once, as a complete
//! profile, when the final step is submitted.

pub mod draft;
pub mod sequencer;

pub use draft::OnboardingDraft;
pub use sequencer::{OnboardingSequencer, StepAnswer};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Linear onboarding step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OnboardingStep {
    PersonalInfo,
    Location,
    FarmingDetails,
    CropSelection,
    PesticidePreference,
    Complete,
}

impl OnboardingStep {
    pub fn first() -> Self {
        OnboardingStep::PersonalInfo
    }

    /// Step that follows this one, or `None` past the end.
    pub fn next(self) -> Option<Self> {
        match self {
            OnboardingStep::PersonalInfo => Some(OnboardingStep::Location),
            OnboardingStep::Location => Some(OnboardingStep::FarmingDetails),
            OnboardingStep::FarmingDetails => Some(OnboardingStep::CropSelection),
            OnboardingStep::CropSelection => Some(OnboardingStep::PesticidePreference),
            OnboardingStep::PesticidePreference => Some(OnboardingStep::Complete),
            OnboardingStep::Complete => None,
        }
    }

    /// Step that precedes this one, or `None` at the start.
    pub fn prev(self) -> Option<Self> {
        match self {
            OnboardingStep::PersonalInfo => None,
            OnboardingStep::Location => Some(OnboardingStep::PersonalInfo),
            OnboardingStep::FarmingDetails => Some(OnboardingStep::Location),
            OnboardingStep::CropSelection => Some(OnboardingStep::FarmingDetails),
            OnboardingStep::PesticidePreference => Some(OnboardingStep::CropSelection),
            OnboardingStep::Complete => Some(OnboardingStep::PesticidePreference),
        }
    }
}

/// Form-field validation failures. Always handled at the offending step;
/// never reaches the gate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} does not match the expected value")]
    Mismatch { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sequence_is_linear_and_terminates() {
        let mut step = OnboardingStep::first();
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(
            visited,
            vec![
                OnboardingStep::PersonalInfo,
                OnboardingStep::Location,
                OnboardingStep::FarmingDetails,
                OnboardingStep::CropSelection,
                OnboardingStep::PesticidePreference,
                OnboardingStep::Complete,
            ]
        );
    }

    #[test]
    fn prev_inverts_next() {
        assert_eq!(OnboardingStep::first().prev(), None);
        assert_eq!(
            OnboardingStep::CropSelection.prev(),
            Some(OnboardingStep::FarmingDetails)
        );
        assert_eq!(
            OnboardingStep::Complete.prev(),
            Some(OnboardingStep::PesticidePreference)
        );
    }
}
