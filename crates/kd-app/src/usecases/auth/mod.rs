//! Auth use cases
//!
//! Thin use cases over the auth backend port. Each validates what the
//! screen can check locally, then delegates; backend failures surface as
//! typed errors for the call site to alert on.

pub mod reset_password;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

pub use reset_password::ResetPassword;
pub use sign_in::{SignIn, SignInError};
pub use sign_out::SignOut;
pub use sign_up::{SignUp, SignUpError};
