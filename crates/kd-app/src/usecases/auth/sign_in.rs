use std::sync::Arc;

use kd_core::ports::{AuthError, AuthPort};
use kd_core::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Use case for signing in with email and password.
pub struct SignIn {
    auth: Arc<dyn AuthPort>,
}

impl SignIn {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<(), SignInError> {
        if email.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "email" }.into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField { field: "password" }.into());
        }
        self.auth.sign_in(email.trim(), password).await?;
        Ok(())
    }
}
