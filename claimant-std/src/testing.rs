//! Testing utilities for claimant.
//!
//! This module provides probes to make dispatch order and laziness observable
//! in tests.
//!
//! # Features
//!
//! - [`CallCounter`]: A shared counter, e.g. for source resolutions
//! - [`counting`]: A source that bumps a counter when resolved
//! - [`EventLog`]: A shared, ordered log
//! - [`recording`]: A listener that logs every corroboration request
//! - [`collecting`]: An acceptance action that logs claim payloads

use claimant_core::Listener;
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Counter
// ============================================================================

/// A cloneable counter shared between a probe and the test body.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Current value.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Wrap `produce` so that resolving it bumps `counter`.
///
/// # Example
///
/// ```rust
/// use claimant_core::Dispatcher;
/// use claimant_std::testing::{CallCounter, counting};
///
/// let resolved = CallCounter::new();
/// let dispatcher = Dispatcher::<u32>::new();
/// dispatcher.dispatch(counting(&resolved, || 1));
/// assert_eq!(resolved.count(), 0);
/// ```
pub fn counting<T, F>(counter: &CallCounter, produce: F) -> impl FnOnce() -> T
where
    F: FnOnce() -> T,
{
    let counter = counter.clone();
    move || {
        counter.bump();
        produce()
    }
}

// ============================================================================
// Event Log
// ============================================================================

/// A cloneable, ordered log of entries.
#[derive(Debug)]
pub struct EventLog<T> {
    entries: Arc<Mutex<Vec<T>>>,
}

impl<T> EventLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append an entry.
    pub fn record(&self, entry: T) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<T: Clone> EventLog<T> {
    /// A copy of the recorded entries, oldest first.
    pub fn entries(&self) -> Vec<T> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EventLog<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records `id` in `scans` every time it is asked to
/// corroborate, and answers `claims`.
///
/// Attach several of these to read back the exact scan order.
///
/// # Example
///
/// ```rust
/// use claimant_core::{Dispatcher, ready};
/// use claimant_std::testing::{EventLog, recording};
///
/// let scans = EventLog::new();
/// let dispatcher = Dispatcher::<()>::new();
/// dispatcher.attach(&recording("first", &scans, false));
/// dispatcher.attach(&recording("second", &scans, true));
/// dispatcher.attach(&recording("third", &scans, true));
///
/// dispatcher.dispatch(ready(()));
/// assert_eq!(scans.entries(), ["first", "second"]);
/// ```
pub fn recording<C, A, Id>(id: Id, scans: &EventLog<Id>, claims: bool) -> Listener<C, A>
where
    Id: Clone + Send + Sync + 'static,
{
    let scans = scans.clone();
    Listener::new().with_corroborate(move |_| {
        scans.record(id.clone());
        claims
    })
}

/// An acceptance action that appends every claim payload to `log`.
pub fn collecting<A>(log: &EventLog<A>) -> impl Fn(A) + Send + Sync + 'static
where
    A: Send + 'static,
{
    let log = log.clone();
    move |payload| log.record(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimant_core::{Dispatcher, ready};

    #[test]
    fn test_counting_source_counts_resolutions() {
        let counter = CallCounter::new();
        let dispatcher = Dispatcher::<u32>::new();
        dispatcher.attach(&recording(0, &EventLog::new(), true));

        dispatcher.dispatch(counting(&counter, || 7));
        dispatcher.dispatch(counting(&counter, || 8));
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_collecting_records_payloads() {
        let accepted = EventLog::new();
        let dispatcher = Dispatcher::<&'static str>::new();
        let listener = recording(1, &EventLog::new(), true).with_accept(collecting(&accepted));
        dispatcher.attach(&listener);

        dispatcher.dispatch(ready("a"));
        dispatcher.dispatch(ready("b"));
        assert_eq!(accepted.entries(), ["a", "b"]);

        accepted.clear();
        assert!(accepted.is_empty());
    }
}
