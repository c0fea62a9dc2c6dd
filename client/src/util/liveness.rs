//! Mount tracking for async continuations.
//!
//! A page spawns work whose completion may arrive after the page is gone.
//! The page holds a [`MountGuard`], releases it from `on_cleanup`, and every
//! continuation checks [`MountGuard::is_mounted`] before touching state.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Mark the owner as unmounted. Idempotent.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
