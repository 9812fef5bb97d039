//! Session domain model
//!
//! A [`Session`] is the in-memory record of the current user's authentication
//! and onboarding-completion status. It has a single writer (the session gate
//! service) and is replaced wholesale on every resolution, never field by
//! field.

pub mod gate;

pub use gate::{GateState, Route};

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Authentication and onboarding status for the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Identity of the signed-in user, if any.
    pub identity: Option<UserId>,
    /// True while an auth transition is still resolving. While set, the
    /// other fields must not be trusted.
    pub loading: bool,
    /// Whether the user's profile document exists and is marked complete.
    pub onboarding_complete: bool,
}

impl Session {
    /// Session at process start or while an auth transition resolves.
    pub fn resolving(identity: Option<UserId>) -> Self {
        Self {
            identity,
            loading: true,
            onboarding_complete: false,
        }
    }

    /// Fully resolved session: both the identity and its paired
    /// profile-completion flag have settled.
    pub fn resolved(identity: Option<UserId>, onboarding_complete: bool) -> Self {
        Self {
            identity,
            loading: false,
            onboarding_complete,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving(None)
    }
}
