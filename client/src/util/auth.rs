//! Session-driven route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never navigate on login success. Instead these guards react to
//! session changes: signed-in users leave the auth screens, signed-out users
//! are sent to `/login` once the stored session has been looked up.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::state::session::{Session, SessionState};

/// Whether a guarded screen should bounce to the login route.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.restoring && !state.is_signed_in()
}

/// Whether an auth screen (login, signup) should hand over to the app.
pub fn should_leave_auth_screen(state: &SessionState) -> bool {
    state.is_signed_in()
}

/// Redirect to the login route whenever restoration finished without a session.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.state()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to the home route as soon as a session exists.
pub fn install_signed_in_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_leave_auth_screen(&session.state()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}
