//! Session gate runtime.
//!
//! Bridges three asynchronous sources into one deterministic route decision:
//! the backend's push-based auth subscription, the pull-based profile lookup
//! paired with each identity change, and the navigation side effect. The
//! session's `loading` flag is the synchronization barrier: it stays set
//! from the moment a transition is observed until the paired lookup settles,
//! and both fields commit in a single state update.
//!
//! A transition resolves in two phases. The lookup phase is cancellable: the
//! run loop drops it when a newer transition arrives, so a slow lookup never
//! delays the identity that superseded it. The commit phase is not: once a
//! resolution commits, its navigation runs to completion, so every committed
//! state change dispatches exactly one route replacement.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use kd_core::config::GateConfig;
use kd_core::ports::{AuthStateChange, NavigationPort, ProfileStorePort};
use kd_core::{GateState, Session, UserId};

use crate::usecases::onboarding::OnboardingDraftStore;

struct GateInner {
    session: Session,
    /// Monotonic marker for the most recent auth transition. A lookup
    /// commits only while its marker is still current, so a slow stale
    /// response can never overwrite a newer identity's state.
    generation: u64,
    /// Last state a navigation was dispatched for. Redundant backend
    /// notifications resolve to the same state and are dropped here.
    last_resolved: Option<GateState>,
}

/// Outcome of the lookup phase, ready to commit.
struct Resolution {
    generation: u64,
    identity: Option<UserId>,
    onboarding_complete: bool,
}

/// Single writer of [`Session`] and single driver of navigation.
pub struct SessionGate {
    inner: Mutex<GateInner>,
    profile_store: Arc<dyn ProfileStorePort>,
    navigator: Arc<dyn NavigationPort>,
    drafts: Arc<OnboardingDraftStore>,
    lookup_timeout: Duration,
}

impl SessionGate {
    pub fn new(
        profile_store: Arc<dyn ProfileStorePort>,
        navigator: Arc<dyn NavigationPort>,
        drafts: Arc<OnboardingDraftStore>,
        config: &GateConfig,
    ) -> Self {
        Self {
            inner: Mutex::new(GateInner {
                session: Session::default(),
                generation: 0,
                last_resolved: None,
            }),
            profile_store,
            navigator,
            drafts,
            lookup_timeout: config.profile_lookup_timeout(),
        }
    }

    /// Latest session snapshot.
    pub async fn session(&self) -> Session {
        self.inner.lock().await.session.clone()
    }

    /// Gate state for the latest snapshot.
    pub async fn state(&self) -> GateState {
        GateState::compute(&self.inner.lock().await.session)
    }

    /// Handle one auth transition: mark the session as resolving, run the
    /// paired profile lookup off-lock, then commit identity and completion
    /// flag together in one update and dispatch the resulting navigation.
    pub async fn handle_auth_change(&self, identity: Option<UserId>) {
        let resolution = self.resolve_transition(identity).await;
        self.commit(resolution).await;
    }

    /// Re-resolve the current identity. Called after the onboarding profile
    /// write so the authoritative store round-trip flips the route.
    pub async fn refresh_onboarding(&self) {
        let identity = self.inner.lock().await.session.identity.clone();
        self.handle_auth_change(identity).await;
    }

    /// Lookup phase. Safe to cancel: nothing past the `resolving` marker is
    /// written until [`Self::commit`].
    async fn resolve_transition(&self, identity: Option<UserId>) -> Resolution {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.session = Session::resolving(identity.clone());
            inner.generation
        };

        let onboarding_complete = match &identity {
            None => false,
            Some(id) => self.resolve_onboarding(id).await,
        };

        Resolution {
            generation,
            identity,
            onboarding_complete,
        }
    }

    /// Commit phase. Must never run inside a cancellable section: recording
    /// `last_resolved` and performing the route replacement have to happen
    /// as a unit, or a transition could end up with no navigation at all.
    /// The inner lock is released before the dispatch so readers are not
    /// blocked behind a slow navigator.
    async fn commit(&self, resolution: Resolution) {
        let state = {
            let mut inner = self.inner.lock().await;
            if inner.generation != resolution.generation {
                debug!(
                    generation = resolution.generation,
                    "discarding superseded session resolution"
                );
                return;
            }
            inner.session =
                Session::resolved(resolution.identity, resolution.onboarding_complete);

            let state = GateState::compute(&inner.session);
            if inner.last_resolved.as_ref() == Some(&state) {
                debug!(?state, "gate state unchanged, navigation skipped");
                return;
            }
            inner.last_resolved = Some(state.clone());
            state
        };

        let first_unanswered = self.drafts.first_unanswered_step().await;
        if let Some(route) = state.route(first_unanswered) {
            debug!(?route, "replacing route");
            if let Err(err) = self.navigator.replace_route(route).await {
                warn!(error = %err, "route replacement failed");
            }
        }
    }

    async fn resolve_onboarding(&self, id: &UserId) -> bool {
        let lookup = self.profile_store.get_profile(id);
        match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(Some(profile))) => profile.onboarding_complete,
            Ok(Ok(None)) => false,
            Ok(Err(err)) => {
                // Fail toward re-onboarding, never silently into Main.
                warn!(user = %id, error = %err, "profile lookup failed, treating onboarding as incomplete");
                false
            }
            Err(_) => {
                warn!(
                    user = %id,
                    timeout_secs = self.lookup_timeout.as_secs(),
                    "profile lookup timed out, treating onboarding as incomplete"
                );
                false
            }
        }
    }

    /// Consume the auth subscription until it closes.
    ///
    /// Transitions are resolved one at a time on this cooperative loop. A
    /// transition that arrives while a lookup is in flight drops the stale
    /// lookup outright, on top of the generation check inside
    /// [`Self::commit`]. Only the lookup is cancellable: the commit runs in
    /// the handler, outside the select, so an event arriving mid-navigation
    /// waits in the channel instead of cancelling the dispatch.
    pub async fn run(self: Arc<Self>, mut events: mpsc::Receiver<AuthStateChange>) {
        let mut inflight: Option<Pin<Box<dyn Future<Output = Resolution> + Send>>> = None;
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(AuthStateChange { identity }) => {
                        if inflight.is_some() {
                            debug!("auth transition superseded an in-flight lookup");
                        }
                        let gate = Arc::clone(&self);
                        inflight = Some(Box::pin(async move {
                            gate.resolve_transition(identity).await
                        }));
                    }
                    None => break,
                },
                resolution = poll_inflight(&mut inflight) => {
                    inflight = None;
                    self.commit(resolution).await;
                }
            }
        }
        // Drain the last resolution before the loop exits.
        if let Some(lookup) = inflight.take() {
            let resolution = lookup.await;
            self.commit(resolution).await;
        }
    }
}

async fn poll_inflight(
    inflight: &mut Option<Pin<Box<dyn Future<Output = Resolution> + Send>>>,
) -> Resolution {
    match inflight.as_mut() {
        Some(lookup) => lookup.as_mut().await,
        None => std::future::pending().await,
    }
}
