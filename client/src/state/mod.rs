//! Application state.
//!
//! ARCHITECTURE
//! ============
//! Plain Rust types hold the state and its transitions so they stay testable
//! without a browser; pages wrap them in signals.

pub mod login_form;
pub mod session;
