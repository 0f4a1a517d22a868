//! High-level API for observable parallel sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a sorter and a convenience function mirroring the classic
//! `runSort(array, observer, delayMillis)` shape.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (100 ms pacing,
//!   ascending order).
//! * **Type-Safe**: Generic over any `Copy + Send + Sync` element with a
//!   caller-supplied total order; `PartialOrd` elements get the ascending
//!   default for free.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain configuration methods (`.delay()`, `.ordering()`, ...).
//! 3. Call `.build()` to get a [`QuadSorter`], then `.sort()` per run.

// External dependencies
use std::time::Duration;

// Internal dependencies
use crate::engine::executor::{run, SortConfig};
use crate::engine::pacing::DEFAULT_DELAY;

// Publicly re-exported types
pub use crate::engine::output::SortReport;
pub use crate::primitives::errors::{RunWarning, SortError};
pub use crate::primitives::observer::{
    NoopObserver, ProgressEvent, ProgressObserver, RecordingObserver,
};
pub use crate::primitives::ordering::{ascending, descending, float_ascending, OrderingFn};

// ============================================================================
// Sorter Builder
// ============================================================================

/// Fluent builder for configuring an observable parallel sorter.
#[derive(Debug, Clone, Copy)]
pub struct SorterBuilder<T> {
    /// Pacing delay per comparison.
    pub delay: Duration,

    /// Base total order over elements.
    pub ordering: OrderingFn<T>,
}

impl<T: Copy + PartialOrd> SorterBuilder<T> {
    /// Create a builder with the defaults: 100 ms pacing, ascending order.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            ordering: ascending::<T>,
        }
    }
}

impl<T: Copy + PartialOrd> Default for SorterBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> SorterBuilder<T> {
    /// Set the pacing delay inserted after every comparison.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the pacing delay in milliseconds.
    pub fn delay_ms(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }

    /// Disable pacing entirely (reference runs, tests).
    pub fn unpaced(mut self) -> Self {
        self.delay = Duration::ZERO;
        self
    }

    /// Replace the base ordering.
    pub fn ordering(mut self, ordering: OrderingFn<T>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Finalize the configuration.
    pub fn build(self) -> Result<QuadSorter<T>, SortError> {
        Ok(QuadSorter {
            config: SortConfig {
                delay: self.delay,
                ordering: self.ordering,
            },
        })
    }
}

// ============================================================================
// Quad Sorter
// ============================================================================

/// Configured four-way parallel observable sorter.
#[derive(Debug, Clone, Copy)]
pub struct QuadSorter<T> {
    config: SortConfig<T>,
}

impl<T: Copy + Send + Sync> QuadSorter<T> {
    /// Sort `values` in place, reporting progress through `observer`.
    pub fn sort(
        &self,
        values: &mut [T],
        observer: &dyn ProgressObserver<T>,
    ) -> Result<SortReport, SortError> {
        run(values, observer, &self.config)
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Sort `values` in place with the given observer and pacing delay, under
/// ascending order.
pub fn run_sort<T>(
    values: &mut [T],
    observer: &dyn ProgressObserver<T>,
    delay: Duration,
) -> Result<SortReport, SortError>
where
    T: Copy + PartialOrd + Send + Sync,
{
    SorterBuilder::new().delay(delay).build()?.sort(values, observer)
}
