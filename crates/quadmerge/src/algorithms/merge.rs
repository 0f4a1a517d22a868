//! In-place merge of two adjacent sorted sub-ranges.
//!
//! ## Purpose
//!
//! This module implements the merge step shared by the recursive sort and
//! the coordinator's combining phase: given that `[from, mid]` and
//! `[mid + 1, to]` are each sorted, produce a single sorted `[from, to]`.
//!
//! ## Design notes
//!
//! * **Buffered**: Merging runs through a temporary buffer of size
//!   `to - from + 1`, then copies back; the view is never left in a
//!   half-merged state between element writes.
//! * **Stable**: Ties are resolved in favor of the first sub-range, so equal
//!   elements keep their relative input order.
//! * **Pure**: The comparator is the only collaborator; instrumentation is
//!   the comparator's business.
//!
//! ## Invariants
//!
//! * `from <= mid <= to` and `to` within the view's span, checked before any
//!   element access.
//! * Every comparison goes through the supplied comparator exactly once.
//!
//! ## Non-goals
//!
//! * This module does not verify that the two sub-ranges are actually sorted.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::arena::RangeView;
use crate::primitives::errors::SortError;
use crate::primitives::ordering::Compare;

// ============================================================================
// Merge
// ============================================================================

/// Merge the sorted sub-ranges `[from, mid]` and `[mid + 1, to]` of `view`
/// into a single sorted `[from, to]`, in place.
pub fn merge<T, C>(
    view: &RangeView<'_, T>,
    from: usize,
    mid: usize,
    to: usize,
    cmp: &C,
) -> Result<(), SortError>
where
    T: Copy,
    C: Compare<T> + ?Sized,
{
    if from > mid || mid > to || !view.span().contains(from) || !view.span().contains(to) {
        return Err(SortError::InvalidRange {
            from,
            to,
            len: view.arena_len(),
        });
    }

    let size = to - from + 1;
    let mut buffer: Vec<T> = Vec::with_capacity(size);

    // Cursor into each sub-range.
    let mut i1 = from;
    let mut i2 = mid + 1;

    // Move the lesser head into the buffer; ties take the first sub-range.
    while i1 <= mid && i2 <= to {
        let left = view.get(i1);
        let right = view.get(i2);
        if cmp.compare(&left, &right) != Ordering::Greater {
            buffer.push(left);
            i1 += 1;
        } else {
            buffer.push(right);
            i2 += 1;
        }
    }

    // At most one of the two sub-ranges still has a remainder.
    while i1 <= mid {
        buffer.push(view.get(i1));
        i1 += 1;
    }
    while i2 <= to {
        buffer.push(view.get(i2));
        i2 += 1;
    }

    for (offset, value) in buffer.into_iter().enumerate() {
        view.set(from + offset, value);
    }

    Ok(())
}
