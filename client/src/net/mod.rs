//! Networking modules for the authentication endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchange and `types` defines the wire schema and
//! response decoding.

pub mod api;
pub mod types;
