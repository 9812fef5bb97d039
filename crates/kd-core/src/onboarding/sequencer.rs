//! Onboarding step sequencer.
//!
//! Pure sequencer over the linear step order. Each answer validates its own
//! fields, merges into the draft, and yields the step to show next. A failed
//! validation leaves the draft untouched.

use super::{OnboardingDraft, OnboardingStep, ValidationError};
use crate::profile::{Gender, PesticidePreference, SoilType};

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 100;
// E.164 national number bounds
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Validated payload for one onboarding step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepAnswer {
    PersonalInfo {
        age: u32,
        gender: Gender,
        phone_number: String,
    },
    Location {
        state: String,
        village: String,
        taluk: String,
        address: String,
    },
    FarmingDetails {
        soil_type: SoilType,
    },
    CropSelection {
        primary_crop: String,
        seasonal_crops: Vec<String>,
    },
    PesticidePreference {
        preference: PesticidePreference,
    },
}

impl StepAnswer {
    /// Step this answer belongs to.
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepAnswer::PersonalInfo { .. } => OnboardingStep::PersonalInfo,
            StepAnswer::Location { .. } => OnboardingStep::Location,
            StepAnswer::FarmingDetails { .. } => OnboardingStep::FarmingDetails,
            StepAnswer::CropSelection { .. } => OnboardingStep::CropSelection,
            StepAnswer::PesticidePreference { .. } => OnboardingStep::PesticidePreference,
        }
    }
}

/// Pure sequencer: no side effects.
pub struct OnboardingSequencer;

impl OnboardingSequencer {
    /// Validate `answer` and merge it into `draft`, returning the step to
    /// show next.
    pub fn apply(
        draft: &mut OnboardingDraft,
        answer: StepAnswer,
    ) -> Result<OnboardingStep, ValidationError> {
        let step = answer.step();
        match answer {
            StepAnswer::PersonalInfo {
                age,
                gender,
                phone_number,
            } => {
                if !(MIN_AGE..=MAX_AGE).contains(&age) {
                    return Err(ValidationError::OutOfRange {
                        field: "age",
                        min: i64::from(MIN_AGE),
                        max: i64::from(MAX_AGE),
                    });
                }
                let phone_number = phone_number.trim().to_string();
                if phone_number.is_empty() {
                    return Err(ValidationError::MissingField {
                        field: "phone_number",
                    });
                }
                if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&phone_number.len()) {
                    return Err(ValidationError::OutOfRange {
                        field: "phone_number",
                        min: MIN_PHONE_DIGITS as i64,
                        max: MAX_PHONE_DIGITS as i64,
                    });
                }
                draft.age = Some(age);
                draft.gender = Some(gender);
                draft.phone_number = Some(phone_number);
            }
            StepAnswer::Location {
                state,
                village,
                taluk,
                address,
            } => {
                let state = non_empty(state, "state")?;
                let village = non_empty(village, "village")?;
                let taluk = non_empty(taluk, "taluk")?;
                let address = non_empty(address, "address")?;
                draft.state = Some(state);
                draft.village = Some(village);
                draft.taluk = Some(taluk);
                draft.address = Some(address);
            }
            StepAnswer::FarmingDetails { soil_type } => {
                draft.soil_type = Some(soil_type);
            }
            StepAnswer::CropSelection {
                primary_crop,
                seasonal_crops,
            } => {
                let primary_crop = non_empty(primary_crop, "primary_crop")?;
                let mut merged = OnboardingDraft::default();
                for crop in &seasonal_crops {
                    merged.add_seasonal_crop(crop)?;
                }
                draft.primary_crop = Some(primary_crop);
                draft.seasonal_crops = merged.seasonal_crops;
            }
            StepAnswer::PesticidePreference { preference } => {
                draft.pesticide_preference = Some(preference);
            }
        }

        // next() is Some for every answerable step
        Ok(step.next().unwrap_or(OnboardingStep::Complete))
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_info() -> StepAnswer {
        StepAnswer::PersonalInfo {
            age: 35,
            gender: Gender::Male,
            phone_number: "9876543210".to_string(),
        }
    }

    #[test]
    fn valid_answer_merges_and_advances() {
        let mut draft = OnboardingDraft::default();
        let next = OnboardingSequencer::apply(&mut draft, personal_info()).expect("valid answer");
        assert_eq!(next, OnboardingStep::Location);
        assert_eq!(draft.age, Some(35));
        assert_eq!(draft.phone_number.as_deref(), Some("9876543210"));
    }

    #[test]
    fn age_outside_bounds_is_rejected() {
        let mut draft = OnboardingDraft::default();
        let err = OnboardingSequencer::apply(
            &mut draft,
            StepAnswer::PersonalInfo {
                age: 17,
                gender: Gender::Other,
                phone_number: "9876543210".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "age",
                min: 18,
                max: 100
            }
        );
        assert_eq!(draft, OnboardingDraft::default());
    }

    #[test]
    fn short_phone_number_is_rejected() {
        let mut draft = OnboardingDraft::default();
        let err = OnboardingSequencer::apply(
            &mut draft,
            StepAnswer::PersonalInfo {
                age: 35,
                gender: Gender::Female,
                phone_number: "12345".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OutOfRange {
                field: "phone_number",
                ..
            }
        ));
    }

    #[test]
    fn blank_location_field_is_rejected_without_merging_others() {
        let mut draft = OnboardingDraft::default();
        let err = OnboardingSequencer::apply(
            &mut draft,
            StepAnswer::Location {
                state: "Karnataka".to_string(),
                village: "   ".to_string(),
                taluk: "Madhugiri".to_string(),
                address: "Main road".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "village" });
        assert!(draft.state.is_none(), "failed step must not merge partially");
    }

    #[test]
    fn duplicate_seasonal_crops_are_rejected() {
        let mut draft = OnboardingDraft::default();
        let err = OnboardingSequencer::apply(
            &mut draft,
            StepAnswer::CropSelection {
                primary_crop: "Ragi".to_string(),
                seasonal_crops: vec!["Groundnut".to_string(), "Groundnut".to_string()],
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Mismatch {
                field: "seasonal_crop"
            }
        );
        assert!(draft.primary_crop.is_none());
    }

    #[test]
    fn final_answerable_step_advances_to_complete() {
        let mut draft = OnboardingDraft::default();
        let next = OnboardingSequencer::apply(
            &mut draft,
            StepAnswer::PesticidePreference {
                preference: PesticidePreference::None,
            },
        )
        .expect("valid answer");
        assert_eq!(next, OnboardingStep::Complete);
    }
}
