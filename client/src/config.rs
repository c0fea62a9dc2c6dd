//! Compile-time client configuration.
//!
//! The browser bundle has no runtime environment, so endpoint overrides are
//! baked in at build time through `SIGNIN_LOGIN_ENDPOINT`.

/// Authentication endpoint receiving `POST {email, password}`.
pub const LOGIN_ENDPOINT: &str = match option_env!("SIGNIN_LOGIN_ENDPOINT") {
    Some(url) => url,
    None => "/api/auth/login",
};

/// Route of the login screen.
pub const LOGIN_ROUTE: &str = "/login";

/// Route of the signup screen.
pub const SIGNUP_ROUTE: &str = "/signup";

/// Landing route for signed-in users.
pub const HOME_ROUTE: &str = "/";

/// Minimum accepted password length, counted in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// `localStorage` key holding the session token.
pub const SESSION_STORAGE_KEY: &str = "signin_session_token";
