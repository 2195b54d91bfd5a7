//! Session-scoped state: the logged-in admin and the login lockout guard.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use scalehouse_core::AdminUserId;

/// Keys used to store values in the session.
pub mod session_keys {
    /// The currently authenticated admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
    /// Login lockout guard state.
    pub const LOCKOUT: &str = "login_lockout";
}

/// The authenticated admin stored in the session after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: AdminUserId,
    pub email: String,
}

/// Failed attempts allowed before the guard locks.
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

/// How long a lockout lasts, in minutes.
pub const LOCKOUT_MINUTES: i64 = 15;

/// Login lockout guard state.
///
/// Lives in the cookie-backed session, so it is scoped per browser per
/// device. It is advisory friction against rapid credential guessing, not a
/// security boundary: clearing cookies or switching browsers resets it.
///
/// Transitions:
/// - `Unlocked(attempts)` --failed login--> `Unlocked(attempts + 1)` while
///   `attempts + 1 < 5`, else `Locked(until = now + 15min)`
/// - `Locked` --time passes `until`--> `Unlocked(0)`
/// - successful login --> `Unlocked(0)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockoutState {
    /// Consecutive failed attempts since the last success or expiry.
    pub attempts: u32,
    /// When set and in the future, submissions are blocked until this instant.
    pub locked_until: Option<DateTime<Utc>>,
}

impl LockoutState {
    /// Whether submissions are currently blocked.
    #[must_use]
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        self.locked_until.is_some_and(|until| now < until)
    }

    /// Record a failed login attempt, locking once the limit is reached.
    pub fn record_failure(&mut self, now: DateTime<Utc>) {
        // An expired lock unwinds to a clean slate before counting again
        if self.locked_until.is_some_and(|until| now >= until) {
            self.reset();
        }

        self.attempts += 1;
        if self.attempts >= MAX_LOGIN_ATTEMPTS {
            self.locked_until = Some(now + Duration::minutes(LOCKOUT_MINUTES));
        }
    }

    /// Clear all state (successful login, or explicit expiry handling).
    pub fn reset(&mut self) {
        self.attempts = 0;
        self.locked_until = None;
    }

    /// Seconds until the lock expires, zero when unlocked.
    ///
    /// The countdown reaches zero exactly when `locked_until` is reached.
    #[must_use]
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        self.locked_until
            .map_or(0, |until| (until - now).num_seconds().max(0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-08-30T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_fresh_state_is_unlocked() {
        let state = LockoutState::default();
        assert!(!state.is_locked(now()));
        assert_eq!(state.attempts, 0);
        assert_eq!(state.remaining_seconds(now()), 0);
    }

    #[test]
    fn test_four_failures_do_not_lock() {
        let mut state = LockoutState::default();
        for _ in 0..4 {
            state.record_failure(now());
        }
        assert_eq!(state.attempts, 4);
        assert!(!state.is_locked(now()));
    }

    #[test]
    fn test_fifth_failure_locks_for_fifteen_minutes() {
        let mut state = LockoutState::default();
        for _ in 0..5 {
            state.record_failure(now());
        }
        assert!(state.is_locked(now()));
        assert_eq!(
            state.locked_until.unwrap(),
            now() + Duration::minutes(LOCKOUT_MINUTES)
        );
        assert_eq!(state.remaining_seconds(now()), LOCKOUT_MINUTES * 60);
    }

    #[test]
    fn test_lock_expires_exactly_at_deadline() {
        let mut state = LockoutState::default();
        for _ in 0..5 {
            state.record_failure(now());
        }

        let just_before = now() + Duration::minutes(LOCKOUT_MINUTES) - Duration::seconds(1);
        assert!(state.is_locked(just_before));
        assert_eq!(state.remaining_seconds(just_before), 1);

        let at_deadline = now() + Duration::minutes(LOCKOUT_MINUTES);
        assert!(!state.is_locked(at_deadline));
        assert_eq!(state.remaining_seconds(at_deadline), 0);
    }

    #[test]
    fn test_failure_after_expiry_starts_a_fresh_count() {
        let mut state = LockoutState::default();
        for _ in 0..5 {
            state.record_failure(now());
        }

        let later = now() + Duration::minutes(LOCKOUT_MINUTES + 1);
        state.record_failure(later);

        assert_eq!(state.attempts, 1);
        assert!(!state.is_locked(later));
    }

    #[test]
    fn test_success_resets_counter_to_zero() {
        let mut state = LockoutState::default();
        for _ in 0..3 {
            state.record_failure(now());
        }
        state.reset();
        assert_eq!(state, LockoutState::default());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut state = LockoutState::default();
        for _ in 0..5 {
            state.record_failure(now());
        }

        let json = serde_json::to_string(&state).unwrap();
        let parsed: LockoutState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
