//! Gate state machine.
//!
//! Defines the pure transition function that maps a session snapshot to
//! exactly one gate state, and the gate state to its destination route.
//! Side effects (navigation) live in the application layer.

use serde::{Deserialize, Serialize};

use crate::onboarding::OnboardingStep;
use crate::session::Session;

/// Destination screen group. Navigation always uses replace semantics, so
/// the route history never grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Entry point for anonymous users.
    Login,
    /// Entry point for authenticated users who have not finished onboarding.
    Onboarding { step: OnboardingStep },
    /// Entry point for returning, fully set-up users.
    Main,
}

/// State the gate derives from the latest session snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// An auth transition is still resolving; render nothing.
    Loading,
    Unauthenticated,
    AuthenticatedIncomplete,
    AuthenticatedComplete,
}

impl GateState {
    /// Pure transition function over a session snapshot.
    pub fn compute(session: &Session) -> Self {
        if session.loading {
            return GateState::Loading;
        }
        if session.identity.is_none() {
            return GateState::Unauthenticated;
        }
        if !session.onboarding_complete {
            return GateState::AuthenticatedIncomplete;
        }
        GateState::AuthenticatedComplete
    }

    /// Destination route for this state, or `None` while still resolving.
    ///
    /// `first_unanswered` picks which onboarding screen an incomplete user
    /// lands on, so a partially answered draft resumes where it left off.
    pub fn route(&self, first_unanswered: OnboardingStep) -> Option<Route> {
        match self {
            GateState::Loading => None,
            GateState::Unauthenticated => Some(Route::Login),
            GateState::AuthenticatedIncomplete => Some(Route::Onboarding {
                step: first_unanswered,
            }),
            GateState::AuthenticatedComplete => Some(Route::Main),
        }
    }
}
