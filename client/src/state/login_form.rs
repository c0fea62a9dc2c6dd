//! Login form state and submit protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LoginPage` keeps a [`LoginForm`] in a signal and drives it in three steps
//! across a `spawn_local` boundary: [`LoginForm::begin_submit`] builds the
//! request, the page awaits [`AuthApi::login`], and [`finish_submit`] settles
//! the outcome into the signal and signs the session in, unless the page has
//! been unmounted in the meantime.
//!
//! [`AuthApi::login`]: crate::net::api::AuthApi::login
//!
//! STATES
//! ======
//! `idle -> submitting` only through a successful `begin_submit`;
//! `submitting -> idle` unconditionally in `settle`.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use std::fmt;

use leptos::prelude::*;

use crate::config::MIN_PASSWORD_CHARS;
use crate::net::api::TransportError;
use crate::net::types::{LoginReply, LoginRequest};
use crate::state::session::SessionSink;
use crate::util::email::looks_like_email;
use crate::util::liveness::MountGuard;

/// Shown when the server rejects the login without a message of its own.
pub const GENERIC_REJECTION_MESSAGE: &str = "Login failed. Please try again.";

/// Shown when no response could be obtained.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Local validation failures, checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in both email and password")]
    MissingCredentials,
    #[error("Please enter a valid email address (e.g., user@example.com)")]
    MalformedEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// Why [`LoginForm::begin_submit`] did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a login request is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Ephemeral state of the login screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    email: String,
    password: String,
    error_message: Option<String>,
    is_submitting: bool,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("error_message", &self.error_message)
            .field("is_submitting", &self.is_submitting)
            .finish()
    }
}

impl LoginForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Check the current input and build the request payload.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationError`].
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if !looks_like_email(&self.email) {
            return Err(ValidationError::MalformedEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(LoginRequest { email: self.email.clone(), password: self.password.clone() })
    }

    /// Start a submit attempt.
    ///
    /// On success the form is `submitting` with no error shown, and the
    /// returned request must be sent exactly once and passed to
    /// [`Self::settle`].
    ///
    /// # Errors
    ///
    /// [`SubmitBlocked::InFlight`] leaves the form untouched.
    /// [`SubmitBlocked::Invalid`] replaces the shown error with the rule's
    /// message.
    pub fn begin_submit(&mut self) -> Result<LoginRequest, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let request = self.validate().inspect_err(|rule| {
            self.error_message = Some(rule.to_string());
        })?;
        self.is_submitting = true;
        self.error_message = None;
        Ok(request)
    }

    /// Apply a settled request and return to idle.
    ///
    /// Returns the session token when the login was accepted.
    pub fn settle(&mut self, outcome: Result<LoginReply, TransportError>) -> Option<String> {
        self.is_submitting = false;
        match outcome {
            Ok(LoginReply::Accepted { token }) => {
                self.error_message = None;
                Some(token)
            }
            Ok(LoginReply::Rejected { message }) => {
                self.error_message = Some(message.unwrap_or_else(|| GENERIC_REJECTION_MESSAGE.to_owned()));
                None
            }
            Err(e) => {
                log::debug!("login transport failure: {e}");
                self.error_message = Some(NETWORK_ERROR_MESSAGE.to_owned());
                None
            }
        }
    }
}

/// Continuation of a submit started with [`LoginForm::begin_submit`].
///
/// When `mounted` has been released the outcome is dropped: the form keeps
/// its state and `session` is not touched. Otherwise the outcome is settled
/// into `form` and a granted token is handed to `session` exactly once.
///
/// Returns `true` when the session was signed in.
pub fn finish_submit<S: SessionSink>(
    form: RwSignal<LoginForm>,
    mounted: &MountGuard,
    outcome: Result<LoginReply, TransportError>,
    session: &S,
) -> bool {
    if !mounted.is_mounted() {
        log::debug!("login settled after page unmount; outcome dropped");
        return false;
    }
    match form.try_update(|f| f.settle(outcome)).flatten() {
        Some(token) => {
            session.sign_in(&token);
            true
        }
        None => false,
    }
}
