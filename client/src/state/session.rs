//! Process-wide session collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` creates one [`Session`] and provides it through context.
//! Screens resolve it once at mount and hand the token over through
//! [`SessionSink::sign_in`]; route guards watch [`SessionState`] to decide
//! which screens are reachable.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use leptos::prelude::*;

use crate::config::SESSION_STORAGE_KEY;
use crate::util::storage;

/// Receiver of freshly issued session tokens.
pub trait SessionSink {
    /// Establish the authenticated session for `token`.
    fn sign_in(&self, token: &str);
}

/// Snapshot of the session as seen by route guards.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    /// True until a stored token has been looked up in the browser.
    pub restoring: bool,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self { token: None, restoring: true }
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("restoring", &self.restoring)
            .finish()
    }
}

/// Reactive handle over the shared [`SessionState`].
#[derive(Clone, Copy, Debug)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Current state; tracked when read inside a reactive scope.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(SessionState::is_signed_in)
    }

    /// Pick up a token persisted by an earlier visit and end the restoring
    /// phase. A token signed in meanwhile wins over the stored one.
    pub fn restore(&self) {
        let stored = storage::load(SESSION_STORAGE_KEY).filter(|t| !t.is_empty());
        self.state.update(|s| {
            if s.token.is_none() {
                s.token = stored;
            }
            s.restoring = false;
        });
        log::debug!("session restored (signed in: {})", self.state.with_untracked(SessionState::is_signed_in));
    }

    pub fn sign_out(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        self.state.update(|s| {
            s.token = None;
            s.restoring = false;
        });
        log::debug!("session signed out");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSink for Session {
    fn sign_in(&self, token: &str) {
        storage::save(SESSION_STORAGE_KEY, token);
        self.state.update(|s| {
            s.token = Some(token.to_owned());
            s.restoring = false;
        });
        log::debug!("session signed in");
    }
}
