//! Application configuration domain model

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Session gate settings
    pub gate: GateConfig,
}

/// Session gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Seconds to wait for a profile lookup before treating it as failed.
    /// Guards against the gate staying in `Loading` indefinitely.
    pub profile_lookup_timeout_secs: u64,
}

impl GateConfig {
    pub fn profile_lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.profile_lookup_timeout_secs)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            profile_lookup_timeout_secs: 10,
        }
    }
}
