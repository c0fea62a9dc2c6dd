//! Wire DTOs for the authentication endpoint.
//!
//! DESIGN
//! ======
//! The endpoint contract is loose: HTTP status decides success vs rejection,
//! and both bodies are optional-ish JSON. Decoding is folded into a single
//! [`LoginReply`] so the form only ever sees "accepted with token" or
//! "rejected with maybe a message". A body that is not JSON is a transport
//! failure, not a rejection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::api::TransportError;

/// Credentials posted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settled, decoded response from the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginReply {
    /// 2xx response carrying a session token.
    Accepted { token: String },
    /// Anything else; `message` is the server-supplied reason, if any.
    Rejected { message: Option<String> },
}

impl LoginReply {
    /// Decode a response from its success flag (2xx) and raw body text.
    ///
    /// Valid JSON without a usable `token` or `message` (absent, empty, or
    /// not a string) decodes to a rejection without a message.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Decode`] when the body is not JSON at all,
    /// whatever the status.
    pub fn from_response(ok: bool, body: &str) -> Result<Self, TransportError> {
        let json: Value =
            serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;

        if ok {
            return Ok(match non_empty_str(&json, "token") {
                Some(token) => Self::Accepted { token },
                None => Self::Rejected { message: None },
            });
        }
        Ok(Self::Rejected { message: non_empty_str(&json, "message") })
    }
}

fn non_empty_str(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
