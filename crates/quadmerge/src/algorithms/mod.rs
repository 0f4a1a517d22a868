//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer provides the pure sorting algorithms: the in-place merge of
//! adjacent sorted sub-ranges and the recursive divide-and-conquer sort.
//! Both are driven entirely through the [`Compare`] seam and know nothing
//! about observers, pacing, or threads.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!
//! [`Compare`]: crate::primitives::ordering::Compare

/// In-place merge of two adjacent sorted sub-ranges.
pub mod merge;

/// Recursive merge sort over an index span.
pub mod sort;
