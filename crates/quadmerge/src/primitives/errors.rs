//! Error and warning types for sort runs.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can abort a sort run before
//! any array mutation, and the non-fatal warnings a completed run can carry.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (indices, lengths).
//! * **Fail-Early**: Fatal conditions are detected before any worker thread
//!   is launched, so a failed run never leaves the caller's data partially
//!   sorted without indication.
//! * **Warnings**: Join-barrier failures are recoverable by design and are
//!   reported as warnings on the run report, never as errors.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty input arrays.
//! 2. **Range validation**: Inverted or out-of-bounds index spans.
//! 3. **Partition validation**: Quarter spans that do not tile the array.
//! 4. **Join recovery**: A worker that could not be joined is a warning.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * A `RunWarning` never implies the run failed, only that the result is
//!   best-effort.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// Internal dependencies
use crate::primitives::range::Span;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sort runs. All variants are fatal and are raised before
/// any worker thread is launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The input array is empty; there is nothing to sort.
    EmptyInput,

    /// An index span is inverted (`from > to`) or falls outside the array.
    InvalidRange {
        /// First index of the offending span.
        from: usize,
        /// Last index of the offending span.
        to: usize,
        /// Length of the array the span was applied to.
        len: usize,
    },

    /// The computed quarter spans do not exactly tile the array.
    InvalidPartition(String),

    /// The operating system refused to spawn a worker thread.
    WorkerSpawn(String),
}

// ============================================================================
// Warning Type
// ============================================================================

/// Non-fatal condition recorded on a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunWarning {
    /// A worker did not report completion at the join barrier (it panicked
    /// or was torn down externally). The merge phase proceeded anyway, so
    /// the final ordering of that quarter is best-effort.
    WorkerJoinIncomplete {
        /// Zero-based index of the worker (0..4).
        worker: usize,
        /// The quarter span the worker was responsible for.
        span: Span,
    },
}

// ============================================================================
// Display Implementations
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::InvalidRange { from, to, len } => {
                write!(
                    f,
                    "Invalid range: [{from}, {to}] (array length {len}, requires from <= to < length)"
                )
            }
            Self::InvalidPartition(msg) => write!(f, "Invalid partition: {msg}"),
            Self::WorkerSpawn(msg) => write!(f, "Could not spawn worker thread: {msg}"),
        }
    }
}

impl Display for RunWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::WorkerJoinIncomplete { worker, span } => {
                write!(
                    f,
                    "Worker {} over [{}, {}] could not be joined; merge phase ran best-effort",
                    worker, span.from, span.to
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SortError {}
