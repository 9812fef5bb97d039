//! User profile domain models
//!
//! The profile is the single document written at the end of onboarding and
//! read once per session resolution. Field names serialize in the camelCase
//! shape the backend document store uses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Soil classification offered during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Mountain,
    Desert,
    Peaty,
    Saline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PesticidePreference {
    Organic,
    Chemical,
    Mixed,
    None,
}

/// Farm location. Coordinates default to the origin until a device fix is
/// available; the address is always user supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// Complete farmer profile as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub age: u32,
    pub gender: Gender,
    pub phone_number: String,
    pub state: String,
    pub village: String,
    pub taluk: String,
    pub location: GeoLocation,
    pub soil_type: SoilType,
    pub primary_crop: String,
    pub seasonal_crops: Vec<String>,
    pub pesticide_preference: PesticidePreference,
    #[serde(rename = "isOnboardingComplete")]
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
}
