//! `SessionStore`: the single source of truth for session state.
//!
//! The store wraps the state in an `RwSignal` and is provided via context,
//! so the router and pages share one reactive view instead of reading an
//! ambient global. All transitions go through the methods here; the store
//! is also the only writer to the storage adapter.
//!
//! State machine: `Loading → {Anonymous, Authenticated}` (initialize);
//! `Anonymous → Authenticated` (login/signup success); `Authenticated →
//! Anonymous` (logout or inactivity expiry). No other edges exist.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::session::directory::CredentialDirectory;
use crate::session::monitor;
use crate::session::state::{
    AuthError, Identity, IdentityPatch, Role, SessionNotice, SessionState, SignupProfile,
};
use crate::session::storage::{self, IdentityStorage};
use crate::util::time::now_ms;

/// Fixed delay standing in for identity-service round-trip time.
#[cfg(feature = "hydrate")]
const LOGIN_LATENCY_MS: u32 = 600;

/// Session lifecycle manager. Cheap to clone; clones share state.
///
/// `Send + Sync` so it can be captured by view closures; the browser-only
/// watchdog handle lives in `monitor`'s thread-local slot instead.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    notice: RwSignal<Option<SessionNotice>>,
    intended: RwSignal<Option<String>>,
    storage: Arc<dyn IdentityStorage>,
    directory: Arc<dyn CredentialDirectory>,
}

impl SessionStore {
    pub fn new(
        storage: Arc<dyn IdentityStorage>,
        directory: Arc<dyn CredentialDirectory>,
    ) -> Self {
        Self {
            state: RwSignal::new(SessionState::Loading),
            notice: RwSignal::new(None),
            intended: RwSignal::new(None),
            storage,
            directory,
        }
    }

    // ---------------------------------------------------------
    // Reads
    // ---------------------------------------------------------

    /// Current state; tracked, for use inside views and effects.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Current state without subscribing the caller.
    pub fn state_untracked(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Pending one-shot notice, if any; tracked.
    pub fn notice(&self) -> Option<SessionNotice> {
        self.notice.get()
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    // ---------------------------------------------------------
    // Intended destination (one-shot, never persisted)
    // ---------------------------------------------------------

    /// Record the path an anonymous visitor was trying to reach.
    pub fn set_intended(&self, path: String) {
        self.intended.set(Some(path));
    }

    /// Consume the recorded destination; a second take yields `None`.
    pub fn take_intended(&self) -> Option<String> {
        self.intended.try_update(Option::take).flatten()
    }

    // ---------------------------------------------------------
    // Transitions
    // ---------------------------------------------------------

    /// Restore the session from storage. Runs once: a well-formed record
    /// yields `Authenticated`, anything else purges the record and yields
    /// `Anonymous`. Until this resolves, observers see `Loading` and the
    /// access gate makes no redirect decision.
    pub fn initialize(&self) {
        if !matches!(self.state.get_untracked(), SessionState::Loading) {
            return;
        }
        match self.storage.load().as_deref().map(storage::decode_identity) {
            Some(Some(identity)) => {
                self.enter_authenticated(identity);
            }
            Some(None) => {
                // Unreadable record: recover silently as anonymous.
                #[cfg(feature = "hydrate")]
                log::warn!("discarding unreadable session record");
                self.storage.clear();
                self.state.set(SessionState::Anonymous);
            }
            None => {
                self.state.set(SessionState::Anonymous);
            }
        }
    }

    /// Exact-match credential check with simulated latency.
    ///
    /// Concurrent calls are not deduplicated; the last resolution wins.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` when no directory entry matches;
    /// state is left untouched in that case.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Identity, AuthError> {
        simulated_latency().await;
        let identity = self
            .directory
            .lookup(identifier, secret)
            .ok_or(AuthError::InvalidCredentials)?;
        self.commit(identity.clone());
        Ok(identity)
    }

    /// Mint a new citizen identity from the supplied profile and sign it in.
    ///
    /// No uniqueness check is made against existing identities; the mock
    /// directory is not consulted. Role is always `Citizen`.
    ///
    /// # Errors
    ///
    /// None observed with the mock directory; the `Result` is the contract
    /// a real identity service would need.
    pub async fn signup(&self, profile: SignupProfile) -> Result<Identity, AuthError> {
        simulated_latency().await;
        let identity = Identity {
            id: uuid::Uuid::new_v4().to_string(),
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            address: profile.address,
            role: Role::Citizen,
            created_at: now_ms(),
        };
        self.commit(identity.clone());
        Ok(identity)
    }

    /// End the session: clear storage, stop the watchdog, go anonymous.
    /// Idempotent; calling while already anonymous is a no-op.
    pub fn logout(&self) {
        if matches!(self.state.get_untracked(), SessionState::Loading) {
            return;
        }
        monitor::stop();
        self.storage.clear();
        self.state.set(SessionState::Anonymous);
    }

    /// Merge profile fields into the signed-in identity and re-persist.
    /// No-op while not authenticated.
    pub fn update_identity(&self, patch: IdentityPatch) {
        if !self.state.with_untracked(SessionState::is_authenticated) {
            return;
        }
        let now = now_ms();
        self.state.update(|state| {
            if let SessionState::Authenticated {
                identity,
                last_active_at,
            } = state
            {
                identity.apply(patch);
                *last_active_at = now;
                if let Some(record) = storage::encode_identity(identity) {
                    self.storage.save(&record);
                }
            }
        });
    }

    // ---------------------------------------------------------
    // Watchdog entry points
    // ---------------------------------------------------------

    /// Register a user-interaction signal. Updates `last_active_at` at most
    /// once per coalescing window; ignored while not authenticated.
    pub fn record_activity(&self, now_ms: i64) {
        let due = self.state.with_untracked(|state| match state {
            SessionState::Authenticated { last_active_at, .. } => {
                monitor::should_refresh(*last_active_at, now_ms)
            }
            SessionState::Loading | SessionState::Anonymous => false,
        });
        if due {
            self.state.update(|state| {
                if let SessionState::Authenticated { last_active_at, .. } = state {
                    *last_active_at = now_ms;
                }
            });
        }
    }

    /// Periodic idle check. On breach, ends the session and raises the
    /// one-shot expiry notice; returns whether expiry fired. Once the state
    /// is anonymous this can never fire again, so the notice is raised at
    /// most once per expiry event.
    pub fn check_idle(&self, now_ms: i64) -> bool {
        let expired = self.state.with_untracked(|state| match state {
            SessionState::Authenticated { last_active_at, .. } => {
                monitor::is_expired(*last_active_at, now_ms)
            }
            SessionState::Loading | SessionState::Anonymous => false,
        });
        if expired {
            #[cfg(feature = "hydrate")]
            log::info!("session expired after inactivity");
            self.logout();
            self.notice.set(Some(SessionNotice::Expired));
        }
        expired
    }

    /// Tear down the watchdog without ending the session. Used by the app
    /// root on unmount; every other exit path goes through `logout`.
    pub fn stop_monitor(&self) {
        monitor::stop();
    }

    // ---------------------------------------------------------
    // Internals
    // ---------------------------------------------------------

    /// Persist and enter the authenticated state with a fresh watchdog.
    fn commit(&self, identity: Identity) {
        if let Some(record) = storage::encode_identity(&identity) {
            self.storage.save(&record);
        }
        self.enter_authenticated(identity);
    }

    fn enter_authenticated(&self, identity: Identity) {
        self.state.set(SessionState::Authenticated {
            identity,
            last_active_at: now_ms(),
        });
        // Any watchdog from a previous session is discarded, not reused.
        monitor::start(self.clone());
    }
}

// Awaits only in the browser; the host build resolves immediately so unit
// tests are not wall-clock bound.
#[allow(clippy::unused_async)]
async fn simulated_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(LOGIN_LATENCY_MS).await;
}
