//! Launch-time validation for sort runs.
//!
//! ## Purpose
//!
//! This module checks everything that must hold before any worker thread is
//! launched: the input is non-empty and the computed quarter spans exactly
//! tile the array with no gap or overlap.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation; a failed run
//!   never mutates the caller's data.
//! * **Runtime Assertion of Disjointness**: The partition check is the
//!   runtime guarantee behind the lock-free worker phase; two overlapping
//!   spans would hand two workers write access to the same index.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not compute partitions (see `primitives::range`).
//! * This module does not validate per-call sort/merge bounds (the
//!   algorithms check their own).

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::range::Span;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort inputs and partitions.
pub struct Validator;

impl Validator {
    /// Validate the input slice for a run.
    pub fn validate_input<T>(values: &[T]) -> Result<(), SortError> {
        if values.is_empty() {
            return Err(SortError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that the quarter spans exactly tile `[0, n - 1]`:
    /// contiguous, pairwise disjoint, in index order, no gap at either end.
    pub fn validate_partition(n: usize, spans: &[Option<Span>; 4]) -> Result<(), SortError> {
        let mut next = 0usize;

        for (i, span) in spans.iter().enumerate() {
            let Some(span) = span else { continue };

            if span.from > span.to {
                return Err(SortError::InvalidPartition(format!(
                    "quarter {i} is inverted: [{}, {}]",
                    span.from, span.to
                )));
            }
            if span.from != next {
                return Err(SortError::InvalidPartition(format!(
                    "quarter {i} starts at {} but index {next} is uncovered",
                    span.from
                )));
            }
            if span.to >= n {
                return Err(SortError::InvalidPartition(format!(
                    "quarter {i} ends at {} past the last index {}",
                    span.to,
                    n - 1
                )));
            }
            next = span.to + 1;
        }

        if next != n {
            return Err(SortError::InvalidPartition(format!(
                "quarters cover [0, {}) but the array has {n} elements",
                next
            )));
        }

        Ok(())
    }
}
