//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (the session gate
//! and use cases) and the external collaborators: the managed authentication
//! backend, the profile document store, and the navigation layer. Following
//! Hexagonal Architecture, the core stays independent of any backend SDK.

pub mod auth;
pub mod errors;
pub mod navigation;
pub mod profile_store;

pub use auth::{AuthPort, AuthStateChange};
pub use errors::{AuthError, ProfileLookupError};
pub use navigation::NavigationPort;
pub use profile_store::ProfileStorePort;
