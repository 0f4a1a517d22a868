//! Tests for the coordinator: partition, fan-out, join barrier, merges.
//!
//! These tests run the full engine with pacing disabled and verify:
//! - Sortedness and permutation preservation
//! - Agreement with a single-threaded reference sort over many trials
//! - Stability across a full parallel run
//! - Join-barrier recovery when a worker dies
//!
//! ## Test Organization
//!
//! 1. **Full Runs** - Sortedness, permutation, custom orderings
//! 2. **Randomized Trials** - Agreement with the reference sort
//! 3. **Stability** - Duplicate keys with secondary identity
//! 4. **Recovery** - Worker panic surfaces as a warning, not an error

use core::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::collections::HashMap;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use quadmerge::engine::executor::{run, SortConfig};
use quadmerge::primitives::errors::{RunWarning, SortError};
use quadmerge::primitives::observer::{NoopObserver, ProgressObserver};
use quadmerge::primitives::ordering::{ascending, descending};

/// Unpaced ascending configuration.
fn unpaced() -> SortConfig<i64> {
    SortConfig {
        delay: Duration::ZERO,
        ordering: ascending::<i64>,
    }
}

/// Multiset fingerprint for permutation checks.
fn counts(values: &[i64]) -> HashMap<i64, usize> {
    let mut map = HashMap::new();
    for &v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

// ============================================================================
// Full Run Tests
// ============================================================================

/// Test the worked example end to end.
#[test]
fn test_run_worked_example() {
    let mut values = vec![5i64, 3, 1, 4, 2];
    let report = run(&mut values, &NoopObserver, &unpaced()).unwrap();

    assert_eq!(values, vec![1, 2, 3, 4, 5]);
    assert_eq!(report.len, 5);
    assert!(report.is_clean(), "no warning expected on a clean run");
    assert!(report.comparisons > 0);
}

/// Test that every length from 1 to 64 sorts correctly, covering all the
/// empty-quarter and degenerate-merge shapes.
#[test]
fn test_run_all_small_lengths() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);

    for n in 1..=64usize {
        let mut values: Vec<i64> = (0..n as i64).collect();
        values.shuffle(&mut rng);
        let before = counts(&values);

        run(&mut values, &NoopObserver, &unpaced()).unwrap();

        assert!(
            values.windows(2).all(|w| w[0] <= w[1]),
            "n={n}: result must be ascending"
        );
        assert_eq!(counts(&values), before, "n={n}: result must be a permutation");
    }
}

/// Test that an empty input is rejected before anything runs.
#[test]
fn test_run_empty_input() {
    let mut values: Vec<i64> = vec![];

    assert_eq!(
        run(&mut values, &NoopObserver, &unpaced()),
        Err(SortError::EmptyInput)
    );
}

/// Test a run under a caller-supplied descending ordering.
#[test]
fn test_run_descending() {
    let mut values = vec![2i64, 9, 4, 7, 1, 8];
    let config = SortConfig {
        delay: Duration::ZERO,
        ordering: descending::<i64>,
    };

    run(&mut values, &NoopObserver, &config).unwrap();

    assert_eq!(values, vec![9, 8, 7, 4, 2, 1]);
}

// ============================================================================
// Randomized Trials
// ============================================================================

/// Test 100 randomized 1000-element runs against the reference sort.
#[test]
fn test_run_matches_reference_sort() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for trial in 0..100 {
        let mut values: Vec<i64> = (0..1000).map(|_| rng.gen_range(-500..500)).collect();
        let mut expected = values.clone();
        expected.sort();

        run(&mut values, &NoopObserver, &unpaced()).unwrap();

        assert_eq!(values, expected, "trial {trial} diverged from reference");
    }
}

// ============================================================================
// Stability Tests
// ============================================================================

/// Test that duplicate keys keep their input order across a full run.
#[test]
fn test_run_is_stable() {
    // Key with few distinct values, id records input position.
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut values: Vec<(u8, u32)> = (0..500u32).map(|id| (rng.gen_range(0..8), id)).collect();

    let config = SortConfig {
        delay: Duration::ZERO,
        ordering: |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0),
    };
    run(&mut values, &NoopObserver, &config).unwrap();

    for pair in values.windows(2) {
        assert!(pair[0].0 <= pair[1].0, "keys must be ascending");
        if pair[0].0 == pair[1].0 {
            assert!(
                pair[0].1 < pair[1].1,
                "equal keys must keep their input order"
            );
        }
    }
}

// ============================================================================
// Recovery Tests
// ============================================================================

/// Observer that panics on the first comparison event it sees.
struct PanicOnce {
    armed: AtomicBool,
}

impl ProgressObserver<i64> for PanicOnce {
    fn report(&self, _values: &[i64], first: Option<i64>, _second: Option<i64>) {
        if first.is_some() && self.armed.swap(false, AtomicOrdering::SeqCst) {
            panic!("observer failure injected by test");
        }
    }
}

/// Test that a worker dying mid-sort is recovered at the join barrier: the
/// run still completes, the warning names the lost quarter, and the result
/// is still a permutation of the input (though not necessarily sorted).
#[test]
fn test_worker_panic_recovered_as_warning() {
    let mut values: Vec<i64> = (0..64).rev().collect();
    let before = counts(&values);
    let observer = PanicOnce {
        armed: AtomicBool::new(true),
    };

    let report = run(&mut values, &observer, &unpaced()).unwrap();

    assert_eq!(report.warnings.len(), 1, "exactly one worker was lost");
    assert!(matches!(
        report.warnings[0],
        RunWarning::WorkerJoinIncomplete { worker, .. } if worker < 4
    ));
    assert!(!report.is_clean());
    assert_eq!(counts(&values), before, "recovery must never lose elements");
}
