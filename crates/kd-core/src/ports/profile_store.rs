//! Profile store port
//!
//! Contract for the backend document store that owns user profiles. The
//! profile is written once at the end of onboarding and read once per
//! session resolution; the app never caches it beyond the current render.

use async_trait::async_trait;

use super::errors::ProfileLookupError;
use crate::ids::UserId;
use crate::profile::UserProfile;

#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Fetch the profile document for `user_id`, or `None` when the user
    /// has never completed onboarding.
    async fn get_profile(&self, user_id: &UserId)
        -> Result<Option<UserProfile>, ProfileLookupError>;

    /// Persist `profile` as a single atomic document write.
    async fn create_profile(&self, profile: &UserProfile) -> Result<(), ProfileLookupError>;
}
