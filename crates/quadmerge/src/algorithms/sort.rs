//! Recursive divide-and-conquer merge sort over an index span.
//!
//! ## Purpose
//!
//! This module implements the classic top-down merge sort each worker runs
//! over its own quarter: recurse on halves, then merge.
//!
//! ## Design notes
//!
//! * **Confined**: Given `[from, to]`, the sort never reads or writes an
//!   index outside that span; the merges it issues are confined the same
//!   way. This is what makes one sort per disjoint quarter safe to run
//!   concurrently with no locking.
//! * **Independent Unit**: A call needs only a view, a span, and a
//!   comparator, so the engine can hand one invocation to each worker
//!   thread as-is.
//! * **Lower-Half Midpoint**: `mid = (from + to) / 2` rounds toward the
//!   lower half on odd spans.
//!
//! ## Invariants
//!
//! * `from <= to` and both inside the view's span, checked once at entry.
//! * The recursion depth is `ceil(log2(span length))`.
//!
//! ## Non-goals
//!
//! * This module does not partition the array or spawn threads (engine).

// Internal dependencies
use crate::algorithms::merge::merge;
use crate::primitives::arena::RangeView;
use crate::primitives::errors::SortError;
use crate::primitives::ordering::Compare;

// ============================================================================
// Recursive Sort
// ============================================================================

/// Sort `[from, to]` of `view` in place under `cmp`.
pub fn merge_sort<T, C>(
    view: &RangeView<'_, T>,
    from: usize,
    to: usize,
    cmp: &C,
) -> Result<(), SortError>
where
    T: Copy,
    C: Compare<T> + ?Sized,
{
    if from > to || !view.span().contains(from) || !view.span().contains(to) {
        return Err(SortError::InvalidRange {
            from,
            to,
            len: view.arena_len(),
        });
    }
    sort_range(view, from, to, cmp)
}

/// Recursive body; bounds already validated by `merge_sort`.
fn sort_range<T, C>(
    view: &RangeView<'_, T>,
    from: usize,
    to: usize,
    cmp: &C,
) -> Result<(), SortError>
where
    T: Copy,
    C: Compare<T> + ?Sized,
{
    // A single element is trivially sorted.
    if from == to {
        return Ok(());
    }

    let mid = (from + to) / 2;
    sort_range(view, from, mid, cmp)?;
    sort_range(view, mid + 1, to, cmp)?;
    merge(view, from, mid, to, cmp)
}
