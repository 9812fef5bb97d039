//! Onboarding draft accumulator.
//!
//! Transient record of form answers gathered across onboarding steps. Owned
//! by a single process-wide store, cleared on completion or logout, and
//! turned into a [`UserProfile`] by one all-or-nothing `finalize` call.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{OnboardingStep, ValidationError};
use crate::ids::UserId;
use crate::profile::{Gender, GeoLocation, PesticidePreference, SoilType, UserProfile};

/// Partially answered onboarding questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OnboardingDraft {
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub state: Option<String>,
    pub village: Option<String>,
    pub taluk: Option<String>,
    pub address: Option<String>,
    pub soil_type: Option<SoilType>,
    pub primary_crop: Option<String>,
    pub seasonal_crops: Vec<String>,
    pub pesticide_preference: Option<PesticidePreference>,
}

impl OnboardingDraft {
    /// Earliest step whose required fields are still missing, or
    /// [`OnboardingStep::Complete`] when every step has been answered.
    pub fn first_unanswered_step(&self) -> OnboardingStep {
        if self.age.is_none() || self.gender.is_none() || self.phone_number.is_none() {
            return OnboardingStep::PersonalInfo;
        }
        if self.state.is_none()
            || self.village.is_none()
            || self.taluk.is_none()
            || self.address.is_none()
        {
            return OnboardingStep::Location;
        }
        if self.soil_type.is_none() {
            return OnboardingStep::FarmingDetails;
        }
        if self.primary_crop.is_none() {
            return OnboardingStep::CropSelection;
        }
        if self.pesticide_preference.is_none() {
            return OnboardingStep::PesticidePreference;
        }
        OnboardingStep::Complete
    }

    /// Add a seasonal crop to the draft. Rejects blank names and duplicates.
    pub fn add_seasonal_crop(&mut self, crop: &str) -> Result<(), ValidationError> {
        let crop = crop.trim();
        if crop.is_empty() {
            return Err(ValidationError::MissingField {
                field: "seasonal_crop",
            });
        }
        if self.seasonal_crops.iter().any(|c| c == crop) {
            return Err(ValidationError::Mismatch {
                field: "seasonal_crop",
            });
        }
        self.seasonal_crops.push(crop.to_string());
        Ok(())
    }

    pub fn remove_seasonal_crop(&mut self, crop: &str) {
        self.seasonal_crops.retain(|c| c != crop);
    }

    /// Build the complete profile from the accumulated answers.
    ///
    /// All-or-nothing: the first missing required field fails the whole
    /// call, so a partial draft can never produce a profile write.
    pub fn finalize(&self, user_id: UserId) -> Result<UserProfile, ValidationError> {
        fn require<T: Clone>(
            value: &Option<T>,
            field: &'static str,
        ) -> Result<T, ValidationError> {
            value
                .clone()
                .ok_or(ValidationError::MissingField { field })
        }

        let age = require(&self.age, "age")?;
        let gender = require(&self.gender, "gender")?;
        let phone_number = require(&self.phone_number, "phone_number")?;
        let state = require(&self.state, "state")?;
        let village = require(&self.village, "village")?;
        let taluk = require(&self.taluk, "taluk")?;
        let address = require(&self.address, "address")?;
        let soil_type = require(&self.soil_type, "soil_type")?;
        let primary_crop = require(&self.primary_crop, "primary_crop")?;
        let pesticide_preference =
            require(&self.pesticide_preference, "pesticide_preference")?;

        Ok(UserProfile {
            user_id,
            age,
            gender,
            phone_number,
            state,
            village,
            taluk,
            // Coordinates start at the origin until a device fix updates them
            location: GeoLocation {
                latitude: 0.0,
                longitude: 0.0,
                address,
            },
            soil_type,
            primary_crop,
            seasonal_crops: self.seasonal_crops.clone(),
            pesticide_preference,
            onboarding_complete: true,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> OnboardingDraft {
        OnboardingDraft {
            age: Some(35),
            gender: Some(Gender::Male),
            phone_number: Some("9876543210".to_string()),
            state: Some("Karnataka".to_string()),
            village: Some("Hosur".to_string()),
            taluk: Some("Madhugiri".to_string()),
            address: Some("Main road, Hosur".to_string()),
            soil_type: Some(SoilType::Black),
            primary_crop: Some("Cotton".to_string()),
            seasonal_crops: vec!["Groundnut".to_string()],
            pesticide_preference: Some(PesticidePreference::Mixed),
        }
    }

    #[test]
    fn empty_draft_starts_at_personal_info() {
        assert_eq!(
            OnboardingDraft::default().first_unanswered_step(),
            OnboardingStep::PersonalInfo
        );
    }

    #[test]
    fn first_unanswered_step_advances_with_answers() {
        let mut draft = OnboardingDraft::default();
        draft.age = Some(35);
        draft.gender = Some(Gender::Male);
        draft.phone_number = Some("9876543210".to_string());
        assert_eq!(draft.first_unanswered_step(), OnboardingStep::Location);

        draft.state = Some("Karnataka".to_string());
        draft.village = Some("Hosur".to_string());
        draft.taluk = Some("Madhugiri".to_string());
        draft.address = Some("Main road".to_string());
        assert_eq!(draft.first_unanswered_step(), OnboardingStep::FarmingDetails);
    }

    #[test]
    fn fully_answered_draft_reports_complete() {
        assert_eq!(
            complete_draft().first_unanswered_step(),
            OnboardingStep::Complete
        );
    }

    #[test]
    fn finalize_rejects_draft_missing_a_required_field() {
        let mut draft = complete_draft();
        draft.soil_type = None;
        let err = draft.finalize(UserId::from("u-1")).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "soil_type" });
    }

    #[test]
    fn finalize_builds_complete_profile() {
        let profile = complete_draft()
            .finalize(UserId::from("u-1"))
            .expect("finalize complete draft");
        assert_eq!(profile.user_id, UserId::from("u-1"));
        assert_eq!(profile.location.latitude, 0.0);
        assert_eq!(profile.location.longitude, 0.0);
        assert_eq!(profile.location.address, "Main road, Hosur");
        assert!(profile.onboarding_complete);
    }

    #[test]
    fn seasonal_crops_reject_blanks_and_duplicates() {
        let mut draft = OnboardingDraft::default();
        draft.add_seasonal_crop("Groundnut").expect("add crop");
        assert_eq!(
            draft.add_seasonal_crop("  "),
            Err(ValidationError::MissingField {
                field: "seasonal_crop"
            })
        );
        assert_eq!(
            draft.add_seasonal_crop("Groundnut"),
            Err(ValidationError::Mismatch {
                field: "seasonal_crop"
            })
        );

        draft.remove_seasonal_crop("Groundnut");
        assert!(draft.seasonal_crops.is_empty());
    }
}
