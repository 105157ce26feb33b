use std::time::{Duration, Instant};

use dioxus::{prelude::*, router::Navigator};
use pokedex::{
    backend::model::app::AppState,
    model::{
        api::{ErrorDto, ErrorKind},
        user::Session,
    },
};

use crate::client::{router::Route, store::session::SessionState};

/// Session for a controller call.
///
/// Refreshes the inactivity timer; when the session expired it is cleared and
/// the window returns to the login view.
pub fn active_session(
    mut session: Signal<SessionState>,
    state: &AppState,
    nav: Navigator,
) -> Option<Session> {
    let timeout = Duration::from_secs(state.config.security.session_timeout_secs);
    let active = session.write().active(Instant::now(), timeout);

    if active.is_none() {
        nav.replace(Route::Login {});
    }

    active
}

/// Session shown by a view, without refreshing the inactivity timer.
pub fn current_session(session: Signal<SessionState>, state: &AppState) -> Option<Session> {
    let timeout = Duration::from_secs(state.config.security.session_timeout_secs);

    session.read().current(Instant::now(), timeout).cloned()
}

/// Session for loading a view's data.
///
/// Reads without subscribing, so refreshing the activity clock does not
/// reload the view.
pub fn session_for_load(session: Signal<SessionState>, state: &AppState) -> Result<Session, ErrorDto> {
    let timeout = Duration::from_secs(state.config.security.session_timeout_secs);

    session
        .peek()
        .current(Instant::now(), timeout)
        .cloned()
        .ok_or_else(|| ErrorDto::new(ErrorKind::Unauthorized, "Session expired, please log in again"))
}
