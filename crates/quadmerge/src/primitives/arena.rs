//! Shared array arena with exclusive range views.
//!
//! ## Purpose
//!
//! This module provides [`SharedArena`], the single shared mutable resource
//! of a sort run, and [`RangeView`], the index-range capability token a
//! worker mutates its own quarter through.
//!
//! ## Design notes
//!
//! * **Atomic Cells**: Elements live in `crossbeam_utils::atomic::AtomicCell`
//!   so that whole-array snapshots taken for observer events are race-free
//!   against concurrent writes in other quarters, without any locking.
//! * **Capability Tokens**: A `RangeView` grants access to one span only;
//!   accesses outside the granted span are a caller bug caught by debug
//!   assertions. Non-overlap of the quarter spans is asserted at launch by
//!   the engine validator, so no two workers ever write the same index.
//! * **Copy Elements**: Loads hand out copies, so a snapshot never aliases
//!   live cells.
//!
//! ## Invariants
//!
//! * The arena length is fixed for the lifetime of a run.
//! * At most one live `RangeView` covers any given index during the worker
//!   phase (enforced by the partition validator at launch).
//!
//! ## Non-goals
//!
//! * This module does not compute or validate partitions (engine layer).
//! * This module does not order concurrent snapshots against writes; a
//!   snapshot observes each cell individually, which is exactly the
//!   "in-flight" state the observer is meant to see.

// External dependencies
use crossbeam_utils::atomic::AtomicCell;

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::range::Span;

// ============================================================================
// Shared Arena
// ============================================================================

/// Fixed-length shared array of atomically accessed elements.
pub struct SharedArena<T> {
    cells: Box<[AtomicCell<T>]>,
}

impl<T: Copy> SharedArena<T> {
    /// Build an arena holding a copy of `values`.
    pub fn from_slice(values: &[T]) -> Self {
        let cells = values.iter().map(|&v| AtomicCell::new(v)).collect();
        Self { cells }
    }

    /// Number of elements in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the arena holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Copy of every element, in index order. Concurrent writers in other
    /// quarters may be observed mid-sort; each cell itself is read whole.
    pub fn snapshot(&self) -> Vec<T> {
        self.cells.iter().map(|cell| cell.load()).collect()
    }

    /// Copy the arena contents back into `out`.
    ///
    /// `out` must have the arena's length; the engine only calls this with
    /// the slice the arena was built from.
    pub fn write_back(&self, out: &mut [T]) {
        debug_assert_eq!(out.len(), self.len());
        for (slot, cell) in out.iter_mut().zip(self.cells.iter()) {
            *slot = cell.load();
        }
    }

    /// Grant a view over `span`, bounds-checked against the arena.
    pub fn view(&self, span: Span) -> Result<RangeView<'_, T>, SortError> {
        if span.to >= self.len() {
            return Err(SortError::InvalidRange {
                from: span.from,
                to: span.to,
                len: self.len(),
            });
        }
        Ok(RangeView { arena: self, span })
    }

    /// Grant a view over the whole arena, for the single-writer merge phase.
    pub fn full_view(&self) -> RangeView<'_, T> {
        debug_assert!(!self.is_empty());
        RangeView {
            arena: self,
            span: Span::new(0, self.len() - 1),
        }
    }
}

// ============================================================================
// Range View
// ============================================================================

/// Capability token granting element access within one span of the arena.
#[derive(Clone, Copy)]
pub struct RangeView<'a, T> {
    arena: &'a SharedArena<T>,
    span: Span,
}

impl<'a, T: Copy> RangeView<'a, T> {
    /// The span this view is confined to.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Length of the underlying arena (not of the span).
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.arena.len()
    }

    /// Load the element at absolute index `index`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        debug_assert!(
            self.span.contains(index),
            "index {index} outside granted span [{}, {}]",
            self.span.from,
            self.span.to
        );
        self.arena.cells[index].load()
    }

    /// Store `value` at absolute index `index`.
    #[inline]
    pub fn set(&self, index: usize, value: T) {
        debug_assert!(
            self.span.contains(index),
            "index {index} outside granted span [{}, {}]",
            self.span.from,
            self.span.to
        );
        self.arena.cells[index].store(value);
    }
}
