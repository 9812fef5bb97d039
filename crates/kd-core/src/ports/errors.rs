use thiserror::Error;

/// Failures surfaced by the authentication backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already in use")]
    EmailInUse,

    #[error("password is too weak")]
    WeakPassword,

    #[error("network error: {0}")]
    Network(String),
}

/// Failures surfaced by the profile document store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileLookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("permission denied")]
    PermissionDenied,
}
