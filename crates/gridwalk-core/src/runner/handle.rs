//! RunHandle — cooperative cancellation for a traversal run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag a scheduling loop checks between ticks.
///
/// Cloning yields another handle to the same run, so a UI layer can hold
/// one and cancel from outside the tick cadence. Cancellation never
/// interrupts an in-flight tick; it only prevents the next one.
#[derive(Debug, Clone, Default)]
pub struct RunHandle {
    cancelled: Arc<AtomicBool>,
}

impl RunHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let a = RunHandle::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }

    #[test]
    fn cancel_is_idempotent() {
        let h = RunHandle::new();
        h.cancel();
        h.cancel();
        assert!(h.is_cancelled());
    }
}
