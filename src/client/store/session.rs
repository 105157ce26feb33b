use std::time::{Duration, Instant};

use pokedex::model::user::Session;

/// Logged-in user of the window, shared through a context signal.
///
/// The session ends after `timeout` without activity; views call
/// [`SessionState::active`] before every controller call, which both checks
/// and refreshes it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    last_active: Option<Instant>,
}

impl SessionState {
    pub fn start(&mut self, session: Session, now: Instant) {
        self.session = Some(session);
        self.last_active = Some(now);
    }

    pub fn end(&mut self) -> Option<Session> {
        self.last_active = None;
        self.session.take()
    }

    /// Session without touching the activity clock; `None` once expired.
    pub fn current(&self, now: Instant, timeout: Duration) -> Option<&Session> {
        let last_active = self.last_active?;
        if now.saturating_duration_since(last_active) > timeout {
            return None;
        }

        self.session.as_ref()
    }

    /// Session for a user action, refreshing the activity clock.
    ///
    /// An expired session is cleared.
    pub fn active(&mut self, now: Instant, timeout: Duration) -> Option<Session> {
        match self.current(now, timeout).cloned() {
            Some(session) => {
                self.last_active = Some(now);
                Some(session)
            }
            None => {
                self.end();
                None
            }
        }
    }
}
