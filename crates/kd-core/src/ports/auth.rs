//! Authentication session port
//!
//! Contract for the managed authentication backend. The backend owns the
//! auth lifecycle; this port exposes the current identity, a push-based
//! state subscription, and the credential operations the screens call.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::AuthError;
use crate::ids::UserId;

/// Notification delivered on every backend auth transition. The backend may
/// deliver duplicates for the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStateChange {
    pub identity: Option<UserId>,
}

#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Identity of the signed-in user, if any.
    async fn current_identity(&self) -> Option<UserId>;

    /// Subscribe to auth state changes. The current state is delivered
    /// immediately, then once per transition. Dropping the receiver
    /// unsubscribes.
    async fn subscribe(&self) -> mpsc::Receiver<AuthStateChange>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}
