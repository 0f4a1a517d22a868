//! Pacing policy for visible progress.
//!
//! ## Purpose
//!
//! This module provides the fixed delay the instrumented comparator inserts
//! after publishing each comparison event, so a human observer can follow
//! the sort in real time.
//!
//! ## Design notes
//!
//! * **Parkable Wait**: The pause parks the calling thread with a timeout.
//!   An early wake (unpark or spurious) is treated as a completed pause and
//!   the comparison proceeds normally; a cut-short wait is never an error
//!   and never surfaces to the sort.
//! * **Zero-Cost Off Switch**: A zero delay skips the park entirely, which
//!   is what tests and reference runs use.
//!
//! ## Invariants
//!
//! * `pause` never panics and never blocks longer than the configured delay
//!   plus scheduler slack.
//!
//! ## Non-goals
//!
//! * This module does not count or publish anything (comparator's job).

// External dependencies
use std::thread;
use std::time::Duration;

// ============================================================================
// Pacing
// ============================================================================

/// Default pacing delay between comparisons: 100 ms.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Fixed per-comparison pacing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    /// Pace with the given delay per comparison.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No pacing at all; comparisons return immediately.
    pub fn disabled() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    /// The configured delay.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Block the calling thread for up to the configured delay. Waking
    /// early counts as a completed pause.
    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::park_timeout(self.delay);
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
