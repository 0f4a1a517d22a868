//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides orchestration and execution control: launch-time
//! validation, the pacing policy, the instrumented comparator, the
//! coordinator that fans work out to the four quarter workers, and the run
//! report.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Instrumented comparator wrapping ordering, observer, and pacing.
pub mod comparator;

/// Coordinator: partition, fan-out, join barrier, combining merges.
pub mod executor;

/// Run report.
pub mod output;

/// Per-comparison pacing policy.
pub mod pacing;

/// Launch-time validation.
pub mod validator;
