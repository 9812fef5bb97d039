use std::sync::Arc;

use kd_core::ports::AuthPort;
use kd_core::ValidationError;

use super::sign_in::SignInError;

/// Use case for requesting a password-reset email.
pub struct ResetPassword {
    auth: Arc<dyn AuthPort>,
}

impl ResetPassword {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, email: &str) -> Result<(), SignInError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField { field: "email" }.into());
        }
        self.auth
            .reset_password(email)
            .await
            .map_err(SignInError::Auth)
    }
}
