//! # Dispatcher
//!
//! Owns the priority-ordered roster of [`Listener`]s and runs the two-phase
//! claim protocol.
//!
//! Per invocation the dispatcher moves through
//! `Idle → ResolvingCorroborate → Scanning → {Unclaimed | ResolvingClaim →
//! Delivering → Claimed}`; nothing but the roster survives between calls.
//!
//! # Ordering
//!
//! The roster is kept sorted by ascending [`Priority`] with a stable sort, so
//! listeners of equal priority keep their relative order (attach order for
//! freshly attached listeners). Re-sorting happens on attach and whenever a
//! held listener's priority changes.
//!
//! [`Priority`]: crate::Priority

use crate::{listener::Listener, outcome::Outcome, source::Source, sync::lock};
use std::{
    fmt,
    ops::{AddAssign, SubAssign},
    sync::{Arc, Mutex},
};

/// The shared listener roster. Listeners hold weak references to it.
pub(crate) struct Roster<C, A> {
    listeners: Mutex<Vec<Listener<C, A>>>,
}

impl<C, A> Roster<C, A> {
    /// Stable ascending sort by priority.
    pub(crate) fn reorder(&self) {
        let mut listeners = lock(&self.listeners);
        listeners.sort_by_key(|listener| listener.priority());
        trace_phase!(listeners = listeners.len(), "roster reordered");
    }
}

/// Dispatches events to the first listener that claims them.
///
/// `Dispatcher` is a handle: clones share one roster.
///
/// # Example
///
/// ```rust
/// use claimant_core::{Dispatcher, Listener, Outcome, ready};
///
/// struct Order { kind: &'static str }
///
/// let assign = Dispatcher::<Order, String>::new();
/// let baker = Listener::new()
///     .with_corroborate(|order: &Order| order.kind == "bake")
///     .with_accept(|task: String| println!("baking {task}"));
/// assign.attach(&baker);
///
/// let outcome = assign.invoke(ready(Order { kind: "bake" }), || "bread".to_string());
/// assert_eq!(outcome, Outcome::Claimed);
/// ```
pub struct Dispatcher<C, A = C> {
    roster: Arc<Roster<C, A>>,
}

impl<C, A> Dispatcher<C, A> {
    /// Create a dispatcher with no listeners.
    pub fn new() -> Self {
        Self {
            roster: Arc::new(Roster {
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Attach `listener`. Attaching a listener that is already attached is a
    /// no-op.
    pub fn attach(&self, listener: &Listener<C, A>) {
        {
            let mut listeners = lock(&self.roster.listeners);
            if listeners.contains(listener) {
                return;
            }
            listeners.push(listener.clone());
            // Bound under the roster lock so a concurrent detach cannot slip
            // between membership and back-reference.
            listener.bind(Arc::downgrade(&self.roster));
        }
        trace_phase!(listener = ?listener.name(), priority = listener.priority(), "listener attached");
        self.roster.reorder();
    }

    /// Detach `listener`. Detaching a listener that is not attached is a
    /// no-op.
    pub fn detach(&self, listener: &Listener<C, A>) {
        let mut listeners = lock(&self.roster.listeners);
        if let Some(index) = listeners.iter().position(|held| held == listener) {
            listeners.remove(index);
            listener.unbind(&self.roster);
            drop(listeners);
            trace_phase!(listener = ?listener.name(), "listener detached");
        }
    }

    /// Returns `true` if `listener` is attached.
    pub fn contains(&self, listener: &Listener<C, A>) -> bool {
        lock(&self.roster.listeners).contains(listener)
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        lock(&self.roster.listeners).len()
    }

    /// Returns `true` if no listener is attached.
    pub fn is_empty(&self) -> bool {
        lock(&self.roster.listeners).is_empty()
    }

    /// Snapshot of the attached listeners in scan order.
    pub fn listeners(&self) -> Vec<Listener<C, A>> {
        lock(&self.roster.listeners).clone()
    }

    /// Offer an event to the attached listeners.
    ///
    /// Listeners are asked in scan order whether they corroborate the payload
    /// produced by `corroborate`; the first one that does receives the payload
    /// produced by `claim` and the dispatch ends.
    ///
    /// - `corroborate` is resolved at most once, and not at all when no
    ///   listener is attached.
    /// - `claim` is resolved only when a claimant exists.
    ///
    /// A hook that panics unwinds through this call unchanged.
    pub fn invoke<S, T>(&self, corroborate: S, claim: T) -> Outcome
    where
        S: Source<C>,
        T: Source<A>,
    {
        self.run(corroborate, move |_| claim.resolve())
    }

    /// The scan/deliver path shared by [`invoke`](Self::invoke) and
    /// [`dispatch`](Dispatcher::dispatch). `claim` turns the resolved
    /// corroborate payload into the claim payload.
    fn run<S, F>(&self, corroborate: S, claim: F) -> Outcome
    where
        S: Source<C>,
        F: FnOnce(C) -> A,
    {
        debug_phase!("dispatching");

        // Scan a snapshot so hooks run without the roster locked.
        let listeners = self.listeners();
        if listeners.is_empty() {
            debug_phase!("dispatch cancelled, no listeners attached");
            return Outcome::Unclaimed;
        }

        let payload = corroborate.resolve();
        let claimant = listeners.iter().find(|listener| {
            let claims = listener.corroborates(&payload);
            if !claims {
                trace_phase!(listener = ?listener.name(), "listener declined");
            }
            claims
        });

        let Some(claimant) = claimant else {
            debug_phase!(consulted = listeners.len(), "dispatch unclaimed");
            return Outcome::Unclaimed;
        };

        debug_phase!(listener = ?claimant.name(), "listener claimed dispatch");
        claimant.accept(claim(payload));
        Outcome::Claimed
    }
}

impl<T> Dispatcher<T, T> {
    /// Offer a single payload that is used both to corroborate and, by move,
    /// as the claim payload.
    ///
    /// Same protocol as [`invoke`](Dispatcher::invoke) with both sources bound
    /// to one resolved value.
    pub fn dispatch<S>(&self, payload: S) -> Outcome
    where
        S: Source<T>,
    {
        self.run(payload, |payload| payload)
    }
}

impl<C, A> Default for Dispatcher<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> Clone for Dispatcher<C, A> {
    fn clone(&self) -> Self {
        Self {
            roster: Arc::clone(&self.roster),
        }
    }
}

impl<C, A> fmt::Debug for Dispatcher<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("listeners", &*lock(&self.roster.listeners))
            .finish()
    }
}

impl<C, A> AddAssign<&Listener<C, A>> for Dispatcher<C, A> {
    fn add_assign(&mut self, listener: &Listener<C, A>) {
        self.attach(listener);
    }
}

impl<C, A> SubAssign<&Listener<C, A>> for Dispatcher<C, A> {
    fn sub_assign(&mut self, listener: &Listener<C, A>) {
        self.detach(listener);
    }
}
