//! Tests for the recursive merge sort over an index span.
//!
//! These tests drive the pure sort with a bare ordering (no instrumentation)
//! and verify:
//! - Full-span and sub-span sorting
//! - Confinement to the given span
//! - Base cases and bounds rejection
//!
//! ## Test Organization
//!
//! 1. **Correctness** - Worked example, duplicates, reverse input
//! 2. **Confinement** - Sub-span sorts leave the rest untouched
//! 3. **Edge Cases** - Single element, comparison counting
//! 4. **Validation** - Inverted and out-of-view bounds

use core::cmp::Ordering;
use core::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use quadmerge::algorithms::sort::merge_sort;
use quadmerge::primitives::arena::SharedArena;
use quadmerge::primitives::errors::SortError;
use quadmerge::primitives::ordering::{ascending, descending};

/// Sort `[from, to]` of `values` under ascending order.
fn sort_ints(values: &[i64], from: usize, to: usize) -> Vec<i64> {
    let arena = SharedArena::from_slice(values);
    let view = arena.full_view();
    merge_sort(&view, from, to, &ascending::<i64>).expect("valid sort bounds");
    arena.snapshot()
}

// ============================================================================
// Correctness Tests
// ============================================================================

/// Test the worked example: [5,3,1,4,2] over [0, 4].
#[test]
fn test_sort_worked_example() {
    assert_eq!(sort_ints(&[5, 3, 1, 4, 2], 0, 4), vec![1, 2, 3, 4, 5]);
}

/// Test sorting with duplicate values.
#[test]
fn test_sort_duplicates() {
    assert_eq!(sort_ints(&[2, 1, 2, 1, 2], 0, 4), vec![1, 1, 2, 2, 2]);
}

/// Test sorting reverse-ordered input.
#[test]
fn test_sort_reversed() {
    assert_eq!(sort_ints(&[6, 5, 4, 3, 2, 1], 0, 5), vec![1, 2, 3, 4, 5, 6]);
}

/// Test sorting under a descending ordering.
#[test]
fn test_sort_descending_order() {
    let arena = SharedArena::from_slice(&[2i64, 5, 1, 4]);
    let view = arena.full_view();
    merge_sort(&view, 0, 3, &descending::<i64>).unwrap();

    assert_eq!(arena.snapshot(), vec![5, 4, 2, 1]);
}

// ============================================================================
// Confinement Tests
// ============================================================================

/// Test that sorting a sub-span never touches indices outside it.
#[test]
fn test_sort_confined_to_span() {
    assert_eq!(
        sort_ints(&[9, 4, 3, 2, 1, 0], 1, 4),
        vec![9, 1, 2, 3, 4, 0],
        "indices 0 and 5 must not move"
    );
}

/// Test that a sort through a quarter view stays inside the quarter.
#[test]
fn test_sort_through_quarter_view() {
    let arena = SharedArena::from_slice(&[8i64, 7, 6, 5]);
    let view = arena
        .view(quadmerge::primitives::range::Span::new(2, 3))
        .unwrap();
    merge_sort(&view, 2, 3, &ascending::<i64>).unwrap();

    assert_eq!(arena.snapshot(), vec![8, 7, 5, 6]);
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that a single-element span returns immediately without comparing.
#[test]
fn test_sort_single_element_no_comparisons() {
    let counter = AtomicUsize::new(0);
    let counting = |a: &i64, b: &i64| -> Ordering {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
        a.cmp(b)
    };

    let arena = SharedArena::from_slice(&[7i64, 3]);
    let view = arena.full_view();
    merge_sort(&view, 1, 1, &counting).unwrap();

    assert_eq!(arena.snapshot(), vec![7, 3]);
    assert_eq!(
        counter.load(AtomicOrdering::Relaxed),
        0,
        "the base case must not compare anything"
    );
}

/// Test that sorting already-sorted input performs n - 1 comparisons per
/// merge level's best case (sanity check that work is comparator-driven).
#[test]
fn test_sort_counts_comparisons() {
    let counter = AtomicUsize::new(0);
    let counting = |a: &i64, b: &i64| -> Ordering {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
        a.cmp(b)
    };

    let arena = SharedArena::from_slice(&[4i64, 3, 2, 1]);
    let view = arena.full_view();
    merge_sort(&view, 0, 3, &counting).unwrap();

    assert_eq!(arena.snapshot(), vec![1, 2, 3, 4]);
    // Two leaf merges of 2 elements (1 comparison each) plus the top merge
    // of 4 reversed-half elements (2 comparisons).
    assert_eq!(counter.load(AtomicOrdering::Relaxed), 4);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that inverted and out-of-view bounds are rejected.
#[test]
fn test_sort_rejects_invalid_bounds() {
    let arena = SharedArena::from_slice(&[3i64, 1, 2]);
    let view = arena.full_view();

    assert!(matches!(
        merge_sort(&view, 2, 1, &ascending::<i64>),
        Err(SortError::InvalidRange { .. })
    ));
    assert!(matches!(
        merge_sort(&view, 0, 3, &ascending::<i64>),
        Err(SortError::InvalidRange { .. })
    ));
    assert_eq!(arena.snapshot(), vec![3, 1, 2], "failed sort must not mutate");
}
