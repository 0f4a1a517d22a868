//! Element ordering capabilities.
//!
//! ## Purpose
//!
//! This module defines the comparison seam between the pure sorting
//! algorithms and whatever drives them: a plain ordering function supplied by
//! the caller, and the [`Compare`] trait the algorithms are generic over.
//! The instrumented comparator in the engine layer implements [`Compare`] on
//! top of an [`OrderingFn`]; tests can drive the algorithms with a bare
//! ordering and no instrumentation at all.
//!
//! ## Design notes
//!
//! * **Stateless**: An `OrderingFn` is a plain `fn` pointer, `Copy` and
//!   shareable read-only across all workers.
//! * **Total**: The supplied ordering must be a total order; the provided
//!   [`ascending`] helper collapses unordered pairs (NaN) to `Equal`.
//! * **Seam**: `Compare` is the only thing the algorithms know about; they
//!   never see the observer or the pacing policy.
//!
//! ## Non-goals
//!
//! * This module does not publish events or pace execution (engine layer).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Ordering Function
// ============================================================================

/// Caller-supplied total order over elements.
pub type OrderingFn<T> = fn(&T, &T) -> Ordering;

/// Ascending order for any partially ordered type, collapsing unordered
/// pairs (e.g. NaN) to `Equal` so the order stays total.
#[inline]
pub fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Descending order, the mirror of [`ascending`].
#[inline]
pub fn descending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    ascending(a, b).reverse()
}

/// Ascending order for IEEE floats with NaN sorted to the end, keeping the
/// order total even for non-finite data.
pub fn float_ascending<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

// ============================================================================
// Compare Trait
// ============================================================================

/// Comparison capability the sorting algorithms are generic over.
///
/// Implementations must be shareable across worker threads; side effects
/// (event publication, pacing) are permitted but must never alter the
/// comparison's truth value.
pub trait Compare<T>: Sync {
    /// Compare two elements under the wrapped total order.
    fn compare(&self, x: &T, y: &T) -> Ordering;
}

/// A bare ordering function is itself a comparator.
impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering + Sync,
{
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self(x, y)
    }
}
