//! Per-username login throttling.
//!
//! A username moves from unlocked to accumulating on its first failure and
//! to locked once the failure count reaches the configured maximum. The lock
//! is never cleared by a timer: the first check after the expiry forgets the
//! username. State lives in memory only and is lost on restart.

use std::{collections::HashMap, sync::Mutex};

use chrono::{Duration, NaiveDateTime};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Attempts {
    failures: u32,
    locked_until: Option<NaiveDateTime>,
}

pub struct LoginThrottle {
    max_attempts: u32,
    lockout: Duration,
    attempts: Mutex<HashMap<String, Attempts>>,
}

impl LoginThrottle {
    pub fn new(max_attempts: u32, lockout_seconds: i64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            lockout: Duration::seconds(lockout_seconds),
            attempts: Mutex::new(HashMap::new()),
        }
    }

    /// `Err` with the remaining lock time in seconds while `username` is locked.
    ///
    /// Checking never counts as an attempt. An expired lock is dropped here.
    pub fn check(&self, username: &str, now: NaiveDateTime) -> Result<(), i64> {
        let mut attempts = self.lock();

        let Some(locked_until) = attempts.get(username).and_then(|a| a.locked_until) else {
            return Ok(());
        };

        if now < locked_until {
            // Partial seconds round up so a locked account never reports 0
            let remaining = (locked_until - now).num_milliseconds();
            return Err((remaining + 999) / 1000);
        }

        attempts.remove(username);
        Ok(())
    }

    /// Count a failed login; returns `true` when this failure locked the account.
    pub fn record_failure(&self, username: &str, now: NaiveDateTime) -> bool {
        let mut attempts = self.lock();
        let entry = attempts.entry(username.to_string()).or_default();

        if entry.locked_until.is_some() {
            return false;
        }

        entry.failures += 1;
        if entry.failures >= self.max_attempts {
            entry.locked_until = Some(now + self.lockout);
            return true;
        }

        false
    }

    pub fn reset(&self, username: &str) {
        self.lock().remove(username);
    }

    /// Failures recorded for `username` since its last reset.
    pub fn failed_attempts(&self, username: &str) -> u32 {
        self.lock().get(username).map_or(0, |a| a.failures)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Attempts>> {
        self.attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
