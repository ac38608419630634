use super::*;

const T0: i64 = 1_700_000_000_000;
const MINUTE_MS: i64 = 60_000;

// =============================================================
// Coalescing gate
// =============================================================

#[test]
fn refresh_gated_within_one_second_window() {
    assert!(!should_refresh(T0, T0));
    assert!(!should_refresh(T0, T0 + 1));
    assert!(!should_refresh(T0, T0 + 999));
}

#[test]
fn refresh_allowed_once_window_elapses() {
    assert!(should_refresh(T0, T0 + ACTIVITY_COALESCE_MS));
    assert!(should_refresh(T0, T0 + 5_000));
}

#[test]
fn refresh_tolerates_clock_regression() {
    // A clock step backwards must not underflow; it simply gates the update.
    assert!(!should_refresh(T0, T0 - 10_000));
}

// =============================================================
// Idle threshold
// =============================================================

#[test]
fn not_expired_under_fifteen_minutes() {
    assert!(!is_expired(T0, T0));
    assert!(!is_expired(T0, T0 + 14 * MINUTE_MS));
    assert!(!is_expired(T0, T0 + IDLE_TIMEOUT_MS - 1));
}

#[test]
fn expired_at_and_beyond_fifteen_minutes() {
    assert!(is_expired(T0, T0 + IDLE_TIMEOUT_MS));
    assert!(is_expired(T0, T0 + 16 * MINUTE_MS));
}

#[test]
fn policy_constants_match_stated_policy() {
    assert_eq!(IDLE_TIMEOUT_MS, 15 * MINUTE_MS);
    assert_eq!(ACTIVITY_COALESCE_MS, 1_000);
    assert!(i64::from(IDLE_POLL_MS) < IDLE_TIMEOUT_MS);
}
