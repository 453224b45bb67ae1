//! # Listener
//!
//! A listener is a candidate handler for a [`Dispatcher`]. It carries two
//! optional hooks and a priority:
//!
//! - **Corroborate** (`Fn(&C) -> bool`): decides whether this listener claims
//!   the event. An unset predicate never claims.
//! - **Accept** (`Fn(A)`): the behavior run when this listener is the
//!   claimant. An unset action makes the claim a silent no-op.
//! - **Priority** (`u8`): lower values are consulted first.
//!
//! [`Listener`] is a cheap handle: clones refer to the same listener, and
//! identity (not structural equality) is what a dispatcher deduplicates on.
//! A listener may be attached to several dispatchers at once; it keeps weak
//! back-references to them so a priority change re-sorts every roster that
//! holds it.

use crate::{dispatcher::Roster, sync::lock};
use std::{
    fmt,
    sync::{
        Arc, Mutex, Weak,
        atomic::{AtomicU8, Ordering},
    },
};

/// Numeric precedence of a listener. Lower values are examined earlier.
pub type Priority = u8;

type CorroborateFn<C> = Arc<dyn Fn(&C) -> bool + Send + Sync>;
type AcceptFn<A> = Arc<dyn Fn(A) + Send + Sync>;

struct Slot<C, A> {
    corroborate: Mutex<Option<CorroborateFn<C>>>,
    accept: Mutex<Option<AcceptFn<A>>>,
    priority: AtomicU8,
    name: Mutex<Option<Arc<str>>>,
    rosters: Mutex<Vec<Weak<Roster<C, A>>>>,
}

/// A candidate handler taking part in claim-driven dispatch.
///
/// `C` is the corroborate payload type, `A` the claim payload type (defaults
/// to `C`).
///
/// # Example
///
/// ```rust
/// use claimant_core::Listener;
///
/// let print = Listener::<Vec<String>>::new()
///     .named("print")
///     .with_priority(1)
///     .with_corroborate(|words: &Vec<String>| words.first().is_some_and(|w| w == "print"))
///     .with_accept(|words: Vec<String>| println!("{}", words[1..].join(" ")));
///
/// assert_eq!(print.priority(), 1);
/// assert_eq!(print.name().as_deref(), Some("print"));
/// ```
pub struct Listener<C, A = C> {
    slot: Arc<Slot<C, A>>,
}

impl<C, A> Listener<C, A> {
    /// Create a listener with no hooks and priority `0`.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Slot {
                corroborate: Mutex::new(None),
                accept: Mutex::new(None),
                priority: AtomicU8::new(0),
                name: Mutex::new(None),
                rosters: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Set the priority.
    pub fn with_priority(self, priority: Priority) -> Self {
        self.set_priority(priority);
        self
    }

    /// Set the corroboration predicate.
    pub fn with_corroborate<F>(self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.set_corroborate(predicate);
        self
    }

    /// Set the acceptance action.
    pub fn with_accept<F>(self, action: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        self.set_accept(action);
        self
    }

    /// Label this listener in log output.
    pub fn named(self, name: impl Into<Arc<str>>) -> Self {
        *lock(&self.slot.name) = Some(name.into());
        self
    }

    /// The diagnostic label, if any.
    pub fn name(&self) -> Option<Arc<str>> {
        lock(&self.slot.name).clone()
    }

    /// The current priority.
    pub fn priority(&self) -> Priority {
        self.slot.priority.load(Ordering::Acquire)
    }

    /// Update the priority.
    ///
    /// Every dispatcher currently holding this listener re-sorts its roster
    /// before this call returns.
    pub fn set_priority(&self, priority: Priority) {
        self.slot.priority.store(priority, Ordering::Release);

        let rosters: Vec<_> = {
            let mut rosters = lock(&self.slot.rosters);
            rosters.retain(|roster| roster.strong_count() > 0);
            rosters.iter().filter_map(Weak::upgrade).collect()
        };
        for roster in rosters {
            roster.reorder();
        }
    }

    /// Replace the corroboration predicate.
    pub fn set_corroborate<F>(&self, predicate: F)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        *lock(&self.slot.corroborate) = Some(Arc::new(predicate));
    }

    /// Replace the acceptance action.
    pub fn set_accept<F>(&self, action: F)
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        *lock(&self.slot.accept) = Some(Arc::new(action));
    }

    /// Remove the corroboration predicate; the listener stops claiming.
    pub fn clear_corroborate(&self) {
        *lock(&self.slot.corroborate) = None;
    }

    /// Remove the acceptance action; claims become no-ops.
    pub fn clear_accept(&self) {
        *lock(&self.slot.accept) = None;
    }

    /// Number of live dispatchers this listener is attached to.
    pub fn dispatcher_count(&self) -> usize {
        lock(&self.slot.rosters)
            .iter()
            .filter(|roster| roster.strong_count() > 0)
            .count()
    }

    /// Ask the predicate whether this listener claims `payload`.
    pub(crate) fn corroborates(&self, payload: &C) -> bool {
        // Clone the hook out so it runs without the lock held.
        let predicate = lock(&self.slot.corroborate).clone();
        predicate.is_some_and(|predicate| predicate(payload))
    }

    /// Deliver the claim payload to the action, if one is set.
    pub(crate) fn accept(&self, payload: A) {
        let action = lock(&self.slot.accept).clone();
        if let Some(action) = action {
            action(payload);
        }
    }

    /// Called with the roster lock held; never takes a roster lock itself.
    pub(crate) fn bind(&self, roster: Weak<Roster<C, A>>) {
        let mut rosters = lock(&self.slot.rosters);
        rosters.retain(|held| held.strong_count() > 0);
        rosters.push(roster);
    }

    pub(crate) fn unbind(&self, roster: &Arc<Roster<C, A>>) {
        lock(&self.slot.rosters).retain(|held| {
            held.strong_count() > 0 && !std::ptr::eq(held.as_ptr(), Arc::as_ptr(roster))
        });
    }
}

impl<C, A> Default for Listener<C, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> Clone for Listener<C, A> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<C, A> PartialEq for Listener<C, A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<C, A> Eq for Listener<C, A> {}

impl<C, A> fmt::Debug for Listener<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("name", &self.name())
            .field("priority", &self.priority())
            .field("corroborate", &lock(&self.slot.corroborate).is_some())
            .field("accept", &lock(&self.slot.accept).is_some())
            .finish()
    }
}
