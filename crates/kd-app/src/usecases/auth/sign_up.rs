use std::sync::Arc;

use kd_core::ports::{AuthError, AuthPort};
use kd_core::ValidationError;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Use case for creating an account.
///
/// Checks the screen can make locally (email shape, password length,
/// confirmation match) run before the backend call; the backend still
/// enforces its own rules and may return the same taxonomy.
pub struct SignUp {
    auth: Arc<dyn AuthPort>,
}

impl SignUp {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
        display_name: Option<&str>,
    ) -> Result<(), SignUpError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField { field: "email" }.into());
        }
        if !email.contains('@') {
            return Err(ValidationError::Mismatch { field: "email" }.into());
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword.into());
        }
        if password != confirm_password {
            return Err(ValidationError::Mismatch { field: "password" }.into());
        }
        self.auth.sign_up(email, password, display_name).await?;
        Ok(())
    }
}
