//! # kd-infra
//!
//! In-memory adapters for the backend boundaries. The real app talks to a
//! managed auth/document service; these implementations stand in for it in
//! local runs and integration tests.

pub mod auth_service;
pub mod profile_store;

pub use auth_service::MemoryAuthService;
pub use profile_store::MemoryProfileStore;
