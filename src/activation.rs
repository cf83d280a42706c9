//! Activation Guard
//!
//! Tracks whether a page is still mounted so async work started on
//! activation can drop its result after the user has navigated away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Activation {
    active: Arc<AtomicBool>,
}

impl Activation {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Mark the page as unmounted; all clones observe it
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Relaxed);
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}
