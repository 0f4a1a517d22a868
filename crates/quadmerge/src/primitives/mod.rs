//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared array arena and range capability tokens.
pub mod arena;

/// Shared error and warning types.
pub mod errors;

/// Progress observer interface.
pub mod observer;

/// Ordering functions and the comparison seam.
pub mod ordering;

/// Index spans and the fixed quarter partition.
pub mod range;
