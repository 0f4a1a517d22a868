//! # quadmerge: Observable Four-Way Parallel Merge Sort
//!
//! A parallel, observable sort: the input is partitioned into four
//! contiguous quarters, each quarter is sorted concurrently by an
//! independent worker thread, and the quarters are combined by three
//! sequential merge steps. Every pairwise comparison anywhere in the
//! algorithm is routed through an instrumented comparator that reports the
//! two elements being compared (plus the full current array state) to an
//! external observer and paces the calling thread, so the progression of
//! the sort is perceivable in real time.
//!
//! Rendering is entirely the observer's business; the core works correctly
//! with a no-op observer and zero delay, in which case it is just a stable
//! parallel merge sort.
//!
//! ## Quick Start
//!
//! ```rust
//! use quadmerge::prelude::*;
//!
//! let mut values = vec![5.0, 3.0, 1.0, 4.0, 2.0];
//!
//! // Build the sorter (unpaced here; the default paces 100 ms per comparison)
//! let sorter = Sorter::new().unpaced().build()?;
//!
//! // Sort with a no-op observer
//! let report = sorter.sort(&mut values, &NoopObserver)?;
//!
//! assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert!(report.is_clean());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Observing Progress
//!
//! ```rust
//! use quadmerge::prelude::*;
//! use std::time::Duration;
//!
//! let mut values = vec![3_i64, 1, 2];
//! let recorder = RecordingObserver::new();
//!
//! run_sort(&mut values, &recorder, Duration::ZERO)?;
//!
//! let events = recorder.take_events();
//! // One event per comparison, plus exactly three merge-complete events.
//! assert_eq!(events.iter().filter(|e| e.is_merge_complete()).count(), 3);
//! assert_eq!(events.last().unwrap().values, vec![1, 2, 3]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Concurrency Model
//!
//! Four scoped worker threads run in true parallel, each confined to its own
//! disjoint index quarter; element cells are atomic, so observer snapshots
//! are race-free without locking. The calling thread blocks at the join
//! barrier until every worker has returned. A worker that cannot be joined
//! (it panicked, e.g. from inside the observer) is recovered: the combining
//! merge phase still runs and the condition is surfaced as a warning on the
//! [`SortReport`](crate::api::SortReport), never as silent corruption.
//!
//! ## Result and Error Handling
//!
//! `sort` returns `Result<SortReport, SortError>`. Errors are raised before
//! any worker thread is launched, so an `Err` means the input slice was not
//! touched. The `?` operator is idiomatic:
//!
//! ```rust
//! use quadmerge::prelude::*;
//!
//! let sorter = Sorter::<f64>::new().unpaced().build()?;
//! let mut empty: Vec<f64> = vec![];
//! assert_eq!(sorter.sort(&mut empty, &NoopObserver), Err(SortError::EmptyInput));
//! # Result::<(), SortError>::Ok(())
//! ```

// Layer 1: Primitives - data structures and basic utilities.
pub mod primitives;

// Layer 2: Algorithms - pure merge and recursive sort.
pub mod algorithms;

// Layer 3: Engine - orchestration and execution control.
pub mod engine;

// High-level fluent API for observable sorting.
pub mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        ascending, descending, float_ascending, run_sort, NoopObserver, ProgressEvent, ProgressObserver,
        QuadSorter, RecordingObserver, RunWarning, SortError, SortReport,
        SorterBuilder as Sorter,
    };
}
