//! Session gate service
//!
//! The gate observes auth transitions, pairs each with its profile lookup,
//! and drives replace-style navigation from the resolved session.

pub mod gate;

pub use gate::SessionGate;
