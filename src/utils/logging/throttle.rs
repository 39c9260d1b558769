//! Capped logging for high-frequency events

use std::sync::atomic::{AtomicU64, Ordering};

/// Lets the first `cap` events through and counts the rest.
///
/// Bulk runs can fail thousands of items with the same error; the throttle
/// keeps the first few in full and reports how many were held back.
#[derive(Debug)]
pub struct LogThrottle {
    cap: u64,
    seen: AtomicU64,
}

impl LogThrottle {
    /// Create a throttle that admits `cap` events
    pub fn new(cap: u64) -> Self {
        Self {
            cap,
            seen: AtomicU64::new(0),
        }
    }

    /// A throttle that never suppresses
    pub fn unlimited() -> Self {
        Self::new(u64::MAX)
    }

    /// Record one event and report whether it should be logged
    pub fn should_log(&self) -> bool {
        self.seen.fetch_add(1, Ordering::Relaxed) < self.cap
    }

    /// Events recorded so far
    pub fn seen(&self) -> u64 {
        self.seen.load(Ordering::Relaxed)
    }

    /// Events that were recorded but not admitted
    pub fn suppressed(&self) -> u64 {
        self.seen().saturating_sub(self.cap)
    }

    /// Configured cap
    pub fn cap(&self) -> u64 {
        self.cap
    }
}

impl Default for LogThrottle {
    fn default() -> Self {
        Self::unlimited()
    }
}
