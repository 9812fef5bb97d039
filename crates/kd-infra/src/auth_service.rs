//! In-memory authentication service
//!
//! Implements [`AuthPort`] over an in-memory account registry with the same
//! observable behavior as the managed backend: subscribers receive the
//! current state immediately on subscribe and an event per transition, and
//! duplicate notifications are possible.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use kd_core::ports::{AuthError, AuthPort, AuthStateChange};
use kd_core::UserId;

const MIN_PASSWORD_LEN: usize = 6;
const EVENT_CHANNEL_CAPACITY: usize = 16;

struct Account {
    user_id: UserId,
    password: String,
    #[allow(dead_code)]
    display_name: String,
}

struct AuthState {
    accounts: HashMap<String, Account>,
    current: Option<UserId>,
    subscribers: Vec<mpsc::Sender<AuthStateChange>>,
}

pub struct MemoryAuthService {
    state: Mutex<AuthState>,
}

impl MemoryAuthService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AuthState {
                accounts: HashMap::new(),
                current: None,
                subscribers: Vec::new(),
            }),
        }
    }

    /// Seed an account without signing it in. Test and demo setup helper.
    pub async fn with_account(self, email: &str, password: &str, display_name: &str) -> Self {
        {
            let mut state = self.state.lock().await;
            state.accounts.insert(
                email.to_string(),
                Account {
                    user_id: UserId::new(),
                    password: password.to_string(),
                    display_name: display_name.to_string(),
                },
            );
        }
        self
    }

    /// Re-deliver the current state to every subscriber. Mirrors the
    /// backend's habit of emitting redundant notifications.
    pub async fn notify_current(&self) {
        let (identity, subscribers) = {
            let state = self.state.lock().await;
            (state.current.clone(), state.subscribers.clone())
        };
        deliver(&subscribers, identity).await;
    }

    async fn transition(&self, identity: Option<UserId>) {
        let subscribers = {
            let mut state = self.state.lock().await;
            state.current = identity.clone();
            state.subscribers.retain(|tx| !tx.is_closed());
            state.subscribers.clone()
        };
        debug!(signed_in = identity.is_some(), "auth state transition");
        deliver(&subscribers, identity).await;
    }
}

async fn deliver(subscribers: &[mpsc::Sender<AuthStateChange>], identity: Option<UserId>) {
    for tx in subscribers {
        let _ = tx
            .send(AuthStateChange {
                identity: identity.clone(),
            })
            .await;
    }
}

impl Default for MemoryAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthPort for MemoryAuthService {
    async fn current_identity(&self) -> Option<UserId> {
        self.state.lock().await.current.clone()
    }

    async fn subscribe(&self) -> mpsc::Receiver<AuthStateChange> {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let identity = {
            let mut state = self.state.lock().await;
            state.subscribers.push(tx.clone());
            state.current.clone()
        };
        // Immediate delivery of the current state, like the backend SDK
        let _ = tx.send(AuthStateChange { identity }).await;
        rx
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let user_id = {
            let state = self.state.lock().await;
            match state.accounts.get(email) {
                Some(account) if account.password == password => account.user_id.clone(),
                _ => return Err(AuthError::InvalidCredentials),
            }
        };
        self.transition(Some(user_id)).await;
        Ok(())
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<(), AuthError> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        let user_id = {
            let mut state = self.state.lock().await;
            if state.accounts.contains_key(email) {
                return Err(AuthError::EmailInUse);
            }
            let user_id = UserId::new();
            state.accounts.insert(
                email.to_string(),
                Account {
                    user_id: user_id.clone(),
                    password: password.to_string(),
                    display_name: display_name.unwrap_or_default().to_string(),
                },
            );
            user_id
        };
        // The backend signs the new account in right away
        self.transition(Some(user_id)).await;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.transition(None).await;
        Ok(())
    }

    async fn reset_password(&self, _email: &str) -> Result<(), AuthError> {
        // Always succeeds so callers cannot probe which emails exist
        Ok(())
    }
}
