//! In-memory profile store
//!
//! Implements [`ProfileStorePort`] over a hash map keyed by user id, with a
//! one-shot failure injection hook so callers can exercise their lookup
//! fallback paths.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kd_core::ports::{ProfileLookupError, ProfileStorePort};
use kd_core::{UserId, UserProfile};

pub struct MemoryProfileStore {
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    fail_next: Mutex<Option<ProfileLookupError>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Mutex::new(HashMap::new()),
            fail_next: Mutex::new(None),
        }
    }

    /// Seed a profile document. Test and demo setup helper.
    pub async fn with_profile(self, profile: UserProfile) -> Self {
        self.profiles
            .lock()
            .await
            .insert(profile.user_id.clone(), profile);
        self
    }

    /// Make the next `get_profile` call fail with `err`.
    pub async fn fail_next_lookup(&self, err: ProfileLookupError) {
        *self.fail_next.lock().await = Some(err);
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.lock().await.len()
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStorePort for MemoryProfileStore {
    async fn get_profile(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, ProfileLookupError> {
        if let Some(err) = self.fail_next.lock().await.take() {
            return Err(err);
        }
        Ok(self.profiles.lock().await.get(user_id).cloned())
    }

    async fn create_profile(&self, profile: &UserProfile) -> Result<(), ProfileLookupError> {
        self.profiles
            .lock()
            .await
            .insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }
}
