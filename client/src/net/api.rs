//! HTTP client for the authentication endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: the endpoint is unreachable and every
//! call reports [`TransportError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures are errors here: no response, or a body that
//! is not JSON. Any JSON response, whatever its status, is decoded into a
//! [`LoginReply`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginReply, LoginRequest};

/// Failure to obtain a decodable response from the endpoint.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built, sent, or its body read.
    #[error("login request failed: {0}")]
    Request(String),
    /// A response arrived but its body was not JSON.
    #[error("login response decode failed: {0}")]
    Decode(String),
    /// No HTTP stack outside the browser.
    #[error("login endpoint not available on server")]
    Unavailable,
}

/// Exchange of credentials for a session token.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Issue exactly one login request and decode the settled response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained.
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, TransportError>;
}

/// [`AuthApi`] over HTTP `POST` with a JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    endpoint: String,
}

impl HttpAuthApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::new(crate::config::LOGIN_ENDPOINT)
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(request)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let body = resp
                .text()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            log::debug!("login endpoint answered with status {}", resp.status());
            LoginReply::from_response(resp.ok(), &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError::Unavailable)
        }
    }
}
