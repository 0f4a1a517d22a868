//! Instrumented comparator coupling the sort to its observer.
//!
//! ## Purpose
//!
//! This module wraps a pure ordering function with the two side effects that
//! make the sort observable: publishing a comparison event (the two elements
//! plus a snapshot of the whole array) and pacing the calling thread.
//!
//! ## Design notes
//!
//! * **Composition**: An [`InstrumentedComparator`] is assembled from a pure
//!   [`OrderingFn`], an observer reference, a [`Pacing`] policy, and the
//!   arena to snapshot. The algorithms only see it through the [`Compare`]
//!   seam, so they stay testable with a bare ordering.
//! * **Truth Preserved**: The returned `Ordering` is exactly the wrapped
//!   function's result; instrumentation never alters it.
//! * **Concurrent Callers**: Each event snapshots into a fresh buffer, so
//!   two in-flight events never interleave their data. The observer itself
//!   must be `Sync`.
//! * **Counted**: Comparisons are tallied with a relaxed atomic for the run
//!   report.
//!
//! ## Invariants
//!
//! * Event publication happens before the pacing pause, which happens before
//!   the result is returned.
//! * A cut-short pause is a no-op, never an error (see [`Pacing`]).
//!
//! ## Non-goals
//!
//! * This module does not decide what gets compared (algorithms) or when
//!   merge-complete events fire (executor).

// External dependencies
use core::cmp::Ordering;
use core::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

// Internal dependencies
use crate::engine::pacing::Pacing;
use crate::primitives::arena::SharedArena;
use crate::primitives::observer::ProgressObserver;
use crate::primitives::ordering::{Compare, OrderingFn};

// ============================================================================
// Instrumented Comparator
// ============================================================================

/// Comparison capability with progress-reporting and pacing side effects.
pub struct InstrumentedComparator<'a, T> {
    arena: &'a SharedArena<T>,
    ordering: OrderingFn<T>,
    observer: &'a dyn ProgressObserver<T>,
    pacing: Pacing,
    comparisons: AtomicUsize,
}

impl<'a, T: Copy> InstrumentedComparator<'a, T> {
    /// Assemble a comparator over `arena`, reporting to `observer`.
    pub fn new(
        arena: &'a SharedArena<T>,
        ordering: OrderingFn<T>,
        observer: &'a dyn ProgressObserver<T>,
        pacing: Pacing,
    ) -> Self {
        Self {
            arena,
            ordering,
            observer,
            pacing,
            comparisons: AtomicUsize::new(0),
        }
    }

    /// Number of comparisons performed so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons.load(AtomicOrdering::Relaxed)
    }
}

impl<T: Copy + Send + Sync> Compare<T> for InstrumentedComparator<'_, T> {
    fn compare(&self, x: &T, y: &T) -> Ordering {
        let snapshot = self.arena.snapshot();
        self.observer.report(&snapshot, Some(*x), Some(*y));
        self.comparisons.fetch_add(1, AtomicOrdering::Relaxed);
        self.pacing.pause();
        (self.ordering)(x, y)
    }
}
