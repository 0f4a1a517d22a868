//! Inclusive index spans and the fixed four-way partition.
//!
//! ## Purpose
//!
//! This module defines [`Span`], the inclusive `(from, to)` index pair every
//! sort and merge operation is confined to, and the fixed four-way quarter
//! partition over an array length.
//!
//! ## Design notes
//!
//! * **Inclusive**: Both endpoints belong to the span, matching the merge
//!   algorithm's cursor arithmetic.
//! * **Validated**: A `Span` can only be constructed with `from <= to`;
//!   empty quarters are represented as `None`, never as an inverted span.
//! * **Fixed Partition**: The split is sized off `mid = n / 2` and
//!   `quart = mid / 2`, so the first two quarters are sized off the lower
//!   half and the last two off the remainder. The tiling is uneven for `n`
//!   not divisible by four but always exhaustive and non-overlapping.
//!
//! ## Invariants
//!
//! * `from <= to` for every constructed `Span`.
//! * For every `n >= 1` the four quarter spans are pairwise disjoint,
//!   contiguous, and their union is exactly `[0, n - 1]`.
//!
//! ## Non-goals
//!
//! * This module does not check spans against a concrete array (the arena
//!   and validator do that).

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Span
// ============================================================================

/// Inclusive index span `[from, to]` into the shared array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index of the span.
    pub from: usize,
    /// Last index of the span (inclusive).
    pub to: usize,
}

impl Span {
    /// Create a span. Inverted bounds are a caller bug; use [`Span::checked`]
    /// for untrusted indices.
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to, "inverted span [{from}, {to}]");
        Self { from, to }
    }

    /// Create a span, rejecting inverted or out-of-bounds indices against an
    /// array of length `len`.
    pub fn checked(from: usize, to: usize, len: usize) -> Result<Self, SortError> {
        if from > to || to >= len {
            return Err(SortError::InvalidRange { from, to, len });
        }
        Ok(Self { from, to })
    }

    /// Number of elements covered by the span.
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from + 1
    }

    /// A span always covers at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` falls inside the span.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.from <= index && index <= self.to
    }
}

// ============================================================================
// Quarter Partition
// ============================================================================

/// The fixed four-way partition of `[0, n - 1]`.
///
/// Quarters that would be empty for small `n` are `None`; the remaining
/// spans still tile the array exactly.
pub fn quarter_partition(n: usize) -> [Option<Span>; 4] {
    if n == 0 {
        return [None, None, None, None];
    }

    let mid = n / 2;
    let quart = mid / 2;

    let bounds = [
        (0, quart),
        (quart + 1, mid),
        (mid + 1, mid + quart),
        (mid + quart + 1, n - 1),
    ];

    bounds.map(|(from, to)| {
        if from <= to && to < n {
            Some(Span { from, to })
        } else {
            None
        }
    })
}

/// Midpoint of the full array (`n / 2`), the boundary between the lower and
/// upper halves used by the combining merge phase.
#[inline]
pub fn half_point(n: usize) -> usize {
    n / 2
}

/// Quarter point (`(n / 2) / 2`), the boundary inside the lower half.
#[inline]
pub fn quarter_point(n: usize) -> usize {
    (n / 2) / 2
}
