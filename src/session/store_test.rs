use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::session::directory::MockDirectory;
use crate::session::storage::{self, MemoryStorage};

const MINUTE_MS: i64 = 60_000;

fn fresh() -> (SessionStore, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::new(storage.clone(), Arc::new(MockDirectory::default()));
    (store, storage)
}

fn signed_in() -> (SessionStore, Arc<MemoryStorage>) {
    let (store, storage) = fresh();
    store.initialize();
    block_on(store.login("test@suvidha.gov.in", "test123")).expect("seeded login");
    (store, storage)
}

fn last_active(store: &SessionStore) -> i64 {
    match store.state_untracked() {
        SessionState::Authenticated { last_active_at, .. } => last_active_at,
        other => panic!("expected authenticated state, got {other:?}"),
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn loading_observed_before_initialize() {
    let (store, _) = fresh();
    assert_eq!(store.state_untracked(), SessionState::Loading);
}

#[test]
fn initialize_restores_well_formed_record() {
    let identity = MockDirectory::default()
        .lookup("admin@suvidha.gov.in", "admin123")
        .expect("seeded admin");
    let record = storage::encode_identity(&identity).expect("encode");
    let storage = Arc::new(MemoryStorage::with_record(&record));
    let store = SessionStore::new(storage, Arc::new(MockDirectory::default()));

    store.initialize();
    assert_eq!(
        store.state_untracked().identity().map(|i| i.id.clone()),
        Some("adm-0001".to_owned())
    );
}

#[test]
fn initialize_purges_corrupt_record() {
    let storage = Arc::new(MemoryStorage::with_record("{ not a record"));
    let store = SessionStore::new(storage.clone(), Arc::new(MockDirectory::default()));

    store.initialize();
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
    assert!(storage.load().is_none());
}

#[test]
fn initialize_without_record_goes_anonymous() {
    let (store, _) = fresh();
    store.initialize();
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
}

#[test]
fn initialize_never_runs_twice() {
    let (store, _) = signed_in();
    store.initialize();
    assert!(store.is_authenticated());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_commits_and_persists() {
    let (store, storage) = signed_in();
    let identity = store.state_untracked().identity().cloned().expect("identity");
    assert_eq!(identity.role, crate::session::state::Role::Citizen);

    let record = storage.load().expect("persisted record");
    assert_eq!(storage::decode_identity(&record), Some(identity));
}

#[test]
fn login_failure_leaves_state_untouched() {
    let (store, storage) = fresh();
    store.initialize();

    let result = block_on(store.login("test@suvidha.gov.in", "wrong"));
    assert_eq!(result, Err(AuthError::InvalidCredentials));
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
    assert!(storage.load().is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_is_idempotent() {
    let (store, storage) = signed_in();
    store.logout();
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
    assert!(storage.load().is_none());

    store.logout();
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
}

#[test]
fn logout_before_initialize_keeps_loading() {
    // The only exits from Loading are through initialize.
    let (store, _) = fresh();
    store.logout();
    assert_eq!(store.state_untracked(), SessionState::Loading);
}

// =============================================================
// Signup
// =============================================================

#[test]
fn signup_mints_citizen_and_persists() {
    let (store, storage) = fresh();
    store.initialize();

    let profile = SignupProfile {
        name: "Ravi Kumar".to_owned(),
        email: "ravi@example.in".to_owned(),
        phone: "9800000042".to_owned(),
        address: "3 Station Road".to_owned(),
    };
    let identity = block_on(store.signup(profile)).expect("signup");
    assert_eq!(identity.role, crate::session::state::Role::Citizen);
    assert!(!identity.id.is_empty());
    assert!(identity.created_at > 0);

    let record = storage.load().expect("persisted record");
    assert_eq!(storage::decode_identity(&record), Some(identity));
}

#[test]
fn signup_does_not_enforce_unique_identifiers() {
    // Known gap: uniqueness belongs to a real directory behind the lookup
    // seam, so duplicate emails mint two distinct identities here.
    let (store, _) = fresh();
    store.initialize();

    let profile = SignupProfile {
        email: "dup@example.in".to_owned(),
        ..SignupProfile::default()
    };
    let first = block_on(store.signup(profile.clone())).expect("first signup");
    let second = block_on(store.signup(profile)).expect("second signup");
    assert_ne!(first.id, second.id);
    assert_eq!(first.email, second.email);
}

// =============================================================
// Profile updates
// =============================================================

#[test]
fn update_identity_merges_and_re_persists() {
    let (store, storage) = signed_in();
    let before = last_active(&store);

    store.update_identity(IdentityPatch {
        phone: Some("9811111111".to_owned()),
        ..IdentityPatch::default()
    });

    let identity = store.state_untracked().identity().cloned().expect("identity");
    assert_eq!(identity.phone, "9811111111");
    assert_eq!(identity.name, "Test Citizen");
    assert!(last_active(&store) >= before);

    let record = storage.load().expect("persisted record");
    assert_eq!(
        storage::decode_identity(&record).map(|i| i.phone),
        Some("9811111111".to_owned())
    );
}

#[test]
fn update_identity_is_noop_while_anonymous() {
    let (store, storage) = fresh();
    store.initialize();
    store.update_identity(IdentityPatch {
        name: Some("Ghost".to_owned()),
        ..IdentityPatch::default()
    });
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
    assert!(storage.load().is_none());
}

// =============================================================
// Activity coalescing
// =============================================================

#[test]
fn activity_within_window_updates_at_most_once() {
    let (store, _) = signed_in();
    let t0 = last_active(&store);

    store.record_activity(t0 + 200);
    store.record_activity(t0 + 600);
    store.record_activity(t0 + 999);
    assert_eq!(last_active(&store), t0);

    store.record_activity(t0 + 1_000);
    assert_eq!(last_active(&store), t0 + 1_000);

    // A burst inside the new window coalesces to the single first winner.
    for offset in 0..50 {
        store.record_activity(t0 + 1_000 + offset * 10);
    }
    assert_eq!(last_active(&store), t0 + 1_000);
}

#[test]
fn activity_while_anonymous_is_ignored() {
    let (store, _) = fresh();
    store.initialize();
    store.record_activity(1_700_000_000_000);
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
}

// =============================================================
// Inactivity expiry
// =============================================================

#[test]
fn idle_session_expires_exactly_once() {
    let (store, storage) = signed_in();
    let t0 = last_active(&store);

    assert!(!store.check_idle(t0 + 14 * MINUTE_MS));
    assert!(store.is_authenticated());

    assert!(store.check_idle(t0 + 16 * MINUTE_MS));
    assert_eq!(store.state_untracked(), SessionState::Anonymous);
    assert_eq!(store.notice(), Some(SessionNotice::Expired));
    assert!(storage.load().is_none());

    // Already anonymous: a later tick cannot fire a second expiry.
    assert!(!store.check_idle(t0 + 17 * MINUTE_MS));
    store.dismiss_notice();
    assert_eq!(store.notice(), None);
}

#[test]
fn activity_signal_resets_idle_timer() {
    let (store, _) = signed_in();
    let t0 = last_active(&store);

    assert!(!store.check_idle(t0 + 14 * MINUTE_MS));
    store.record_activity(t0 + 14 * MINUTE_MS);

    // 14 further idle minutes measure from the keydown, not from t0.
    assert!(!store.check_idle(t0 + 28 * MINUTE_MS));
    assert!(store.is_authenticated());

    assert!(store.check_idle(t0 + 30 * MINUTE_MS));
}

#[test]
fn login_after_expiry_reenters_authenticated() {
    let (store, _) = signed_in();
    let t0 = last_active(&store);
    assert!(store.check_idle(t0 + 16 * MINUTE_MS));

    block_on(store.login("test@suvidha.gov.in", "test123")).expect("re-login");
    assert!(store.is_authenticated());
}

// =============================================================
// Intended destination
// =============================================================

#[test]
fn intended_destination_is_consumed_once() {
    let (store, _) = fresh();
    store.set_intended("/account".to_owned());
    assert_eq!(store.take_intended().as_deref(), Some("/account"));
    assert_eq!(store.take_intended(), None);
}
