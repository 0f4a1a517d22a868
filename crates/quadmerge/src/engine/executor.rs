//! Coordinator for a four-way parallel sort run.
//!
//! ## Purpose
//!
//! This module orchestrates a full run: partition the array into four
//! quarters, launch one worker thread per non-empty quarter, wait for all of
//! them at the join barrier, then combine the sorted quarters with three
//! sequential merges, notifying the observer after each.
//!
//! ## Design notes
//!
//! * **Phases**: `Partitioning → WorkersRunning → Joined → Merging → Done`;
//!   the merge phase never starts before every worker has been joined (or
//!   recovered from).
//! * **Scoped Threads**: Workers are `crossbeam-utils` scoped threads named
//!   after their quarter, so the arena and comparator are borrowed rather
//!   than `Arc`-wrapped.
//! * **Join Recovery**: A worker that cannot be joined (it panicked, e.g.
//!   from inside the observer) is recorded as a warning and the merge phase
//!   runs against whatever state its quarter is in. Best-effort, not a
//!   correctness guarantee, and said so on the report.
//! * **Degenerate Merges**: For tiny inputs a combining step may have an
//!   empty side; the merge is skipped but its observer notification still
//!   fires, so a run always emits exactly three merge-complete events.
//!
//! ## Invariants
//!
//! * Validation happens before the arena is built; a returned error means
//!   the caller's slice was not touched.
//! * During the worker phase each quarter has exactly one writer; during the
//!   merge phase the coordinator is the sole writer.
//!
//! ## Non-goals
//!
//! * This module does not render progress (observer's concern) and does not
//!   expose partial results.

// External dependencies
use crossbeam_utils::thread;
use log::{debug, warn};
use std::time::Duration;

// Internal dependencies
use crate::algorithms::merge::merge;
use crate::algorithms::sort::merge_sort;
use crate::engine::comparator::InstrumentedComparator;
use crate::engine::output::SortReport;
use crate::engine::pacing::Pacing;
use crate::engine::validator::Validator;
use crate::primitives::arena::SharedArena;
use crate::primitives::errors::{RunWarning, SortError};
use crate::primitives::observer::ProgressObserver;
use crate::primitives::ordering::OrderingFn;
use crate::primitives::range::{half_point, quarter_partition, quarter_point, Span};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one sort run.
#[derive(Debug, Clone, Copy)]
pub struct SortConfig<T> {
    /// Pacing delay inserted after every comparison event.
    pub delay: Duration,

    /// Base total order over elements.
    pub ordering: OrderingFn<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Sort `values` in place, reporting progress through `observer`.
///
/// Returns once the array is fully sorted (or best-effort sorted, see
/// [`RunWarning::WorkerJoinIncomplete`]); the report carries the comparison
/// count and any recovered conditions.
pub fn run<T>(
    values: &mut [T],
    observer: &dyn ProgressObserver<T>,
    config: &SortConfig<T>,
) -> Result<SortReport, SortError>
where
    T: Copy + Send + Sync,
{
    Validator::validate_input(values)?;

    let n = values.len();
    let spans = quarter_partition(n);
    Validator::validate_partition(n, &spans)?;
    debug!("partitioned {n} elements into quarters {spans:?}");

    let arena = SharedArena::from_slice(values);
    let comparator =
        InstrumentedComparator::new(&arena, config.ordering, observer, Pacing::new(config.delay));

    let warnings = fan_out(&arena, &comparator, &spans)?;
    debug!(
        "join barrier passed with {} recovered worker(s)",
        warnings.len()
    );
    for warning in &warnings {
        warn!("{warning}");
    }

    merge_quarters(&arena, &comparator, observer, n)?;
    debug!("merge phase complete after {} comparisons", comparator.comparisons());

    arena.write_back(values);

    Ok(SortReport {
        len: n,
        comparisons: comparator.comparisons(),
        warnings,
    })
}

// ============================================================================
// Worker Phase
// ============================================================================

/// Launch one worker per non-empty quarter and wait for all of them.
///
/// Returns the join-recovery warnings; a spawn failure or a worker-reported
/// error is fatal.
fn fan_out<T>(
    arena: &SharedArena<T>,
    comparator: &InstrumentedComparator<'_, T>,
    spans: &[Option<Span>; 4],
) -> Result<Vec<RunWarning>, SortError>
where
    T: Copy + Send + Sync,
{
    let outcome = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(4);
        let mut fatal: Option<SortError> = None;

        for (worker, span) in spans.iter().enumerate() {
            let Some(span) = *span else { continue };
            let view = match arena.view(span) {
                Ok(view) => view,
                Err(e) => {
                    fatal = Some(e);
                    break;
                }
            };
            let spawned = scope
                .builder()
                .name(format!("quarter-{}", worker + 1))
                .spawn(move |_| merge_sort(&view, span.from, span.to, comparator));
            match spawned {
                Ok(handle) => handles.push((worker, span, handle)),
                Err(e) => {
                    fatal = Some(SortError::WorkerSpawn(e.to_string()));
                    break;
                }
            }
        }

        // Join barrier: every spawned worker is joined, even when a spawn
        // failed midway, so the merge phase never races a live worker.
        let mut warnings = Vec::new();
        for (worker, span, handle) in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => fatal = Some(e),
                Err(_) => warnings.push(RunWarning::WorkerJoinIncomplete { worker, span }),
            }
        }

        (warnings, fatal)
    });

    // Every handle was joined above, so the scope itself cannot observe a
    // stray panic; treat it as a failed spawn if it somehow does.
    let (warnings, fatal) = match outcome {
        Ok(pair) => pair,
        Err(_) => (
            Vec::new(),
            Some(SortError::WorkerSpawn("worker scope panicked".into())),
        ),
    };

    match fatal {
        Some(error) => Err(error),
        None => Ok(warnings),
    }
}

// ============================================================================
// Merge Phase
// ============================================================================

/// Combine the four sorted quarters with three sequential merges, notifying
/// the observer (highlights cleared) after each.
fn merge_quarters<T>(
    arena: &SharedArena<T>,
    comparator: &InstrumentedComparator<'_, T>,
    observer: &dyn ProgressObserver<T>,
    n: usize,
) -> Result<(), SortError>
where
    T: Copy + Send + Sync,
{
    let full = arena.full_view();
    let mid = half_point(n);
    let quart = quarter_point(n);

    // Lower half, upper half, then the whole array.
    let steps = [
        (0, quart, mid),
        (mid + 1, mid + quart, n - 1),
        (0, mid, n - 1),
    ];

    for (from, boundary, to) in steps {
        // A step with an empty side has nothing to combine for tiny inputs;
        // its notification still fires so observers always see three.
        if from <= boundary && boundary < to {
            merge(&full, from, boundary, to, comparator)?;
        }
        observer.report(&arena.snapshot(), None, None);
    }

    Ok(())
}
