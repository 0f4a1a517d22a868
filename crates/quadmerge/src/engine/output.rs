//! Run report for a completed sort.
//!
//! ## Purpose
//!
//! This module defines [`SortReport`], the summary a completed run returns:
//! how much work was done and whether any worker had to be recovered at the
//! join barrier.
//!
//! ## Design notes
//!
//! * **Honest**: A run that recovered from an incomplete join still returns
//!   `Ok`, but the warning is carried on the report rather than hidden.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `comparisons` counts every invocation of the instrumented comparator,
//!   across both the worker and merge phases.
//! * An empty `warnings` list means the result is guaranteed sorted.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::errors::RunWarning;

// ============================================================================
// Sort Report
// ============================================================================

/// Summary of a completed sort run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    /// Number of elements sorted.
    pub len: usize,

    /// Total comparisons routed through the instrumented comparator.
    pub comparisons: usize,

    /// Non-fatal conditions recovered during the run. Empty on a clean run;
    /// a `WorkerJoinIncomplete` entry means the final ordering of that
    /// worker's quarter is best-effort.
    pub warnings: Vec<RunWarning>,
}

impl SortReport {
    /// Whether the run completed without any recovered condition.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:    {}", self.len)?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        if self.warnings.is_empty() {
            write!(f, "  Warnings:    none")?;
        } else {
            write!(f, "  Warnings:")?;
            for warning in &self.warnings {
                write!(f, "\n    - {warning}")?;
            }
        }
        Ok(())
    }
}
