//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates state transitions
//! to `state`.

pub mod home;
pub mod login;
pub mod signup;
