//! Progress observer interface.
//!
//! ## Purpose
//!
//! This module defines the observer seam the sort reports progress through:
//! one notification per comparison (with the two compared elements
//! highlighted) and one notification after each combining merge (with the
//! highlights cleared). Rendering is entirely the observer's concern; the
//! core works correctly with [`NoopObserver`].
//!
//! ## Design notes
//!
//! * **Sync**: Observers are invoked concurrently from four workers and must
//!   tolerate that without corrupting internal state.
//! * **Ephemeral Events**: The array snapshot passed to `report` is a fresh
//!   buffer per call; two concurrent events never share or interleave data.
//! * **Unordered**: No global ordering is imposed between events from
//!   different workers; only each worker's own events are causally ordered.
//!
//! ## Key concepts
//!
//! * **Comparison event**: `report(values, Some(x), Some(y))`.
//! * **Merge-complete event**: `report(values, None, None)`, exactly three
//!   per run, in combining order.
//!
//! ## Non-goals
//!
//! * This module does not render anything; [`RecordingObserver`] exists for
//!   tests and demos, real renderers live outside the crate.

// External dependencies
use std::sync::Mutex;

// ============================================================================
// Observer Trait
// ============================================================================

/// Receiver for sort progress notifications.
///
/// Implementations must be callable concurrently from multiple worker
/// threads. A panic inside an observer tears down the calling worker; the
/// coordinator recovers at the join barrier and reports a warning.
pub trait ProgressObserver<T>: Sync {
    /// Report the current array contents. `first` and `second` carry the two
    /// elements just compared, or `None` for a merge-complete notification.
    fn report(&self, values: &[T], first: Option<T>, second: Option<T>);
}

// ============================================================================
// No-op Observer
// ============================================================================

/// Observer that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T> ProgressObserver<T> for NoopObserver {
    #[inline]
    fn report(&self, _values: &[T], _first: Option<T>, _second: Option<T>) {}
}

// ============================================================================
// Recording Observer
// ============================================================================

/// One recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent<T> {
    /// Snapshot of the full array at notification time.
    pub values: Vec<T>,
    /// First highlighted element, if this was a comparison event.
    pub first: Option<T>,
    /// Second highlighted element, if this was a comparison event.
    pub second: Option<T>,
}

impl<T> ProgressEvent<T> {
    /// Whether this event marks a completed combining merge.
    #[inline]
    pub fn is_merge_complete(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

/// Observer that records every notification, for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingObserver<T> {
    events: Mutex<Vec<ProgressEvent<T>>>,
}

impl<T: Clone> RecordingObserver<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Drain and return every recorded event in arrival order.
    pub fn take_events(&self) -> Vec<ProgressEvent<T>> {
        match self.events.lock() {
            Ok(mut guard) => core::mem::take(&mut *guard),
            Err(poisoned) => core::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Number of notifications recorded so far.
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Whether no notification has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send> ProgressObserver<T> for RecordingObserver<T> {
    fn report(&self, values: &[T], first: Option<T>, second: Option<T>) {
        let event = ProgressEvent {
            values: values.to_vec(),
            first,
            second,
        };
        match self.events.lock() {
            Ok(mut guard) => guard.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
