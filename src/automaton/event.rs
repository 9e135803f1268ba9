//! Transition events and listener subscriptions.

use crate::core::State;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Record of one committed transition, handed to every listener.
///
/// `input` is the value passed to `next`, or `None` for `force`.
#[derive(Debug)]
pub struct TransitionEvent<'a, S: State, I> {
    pub from: S,
    pub to: S,
    pub input: Option<&'a I>,
}

impl<S: State, I> TransitionEvent<'_, S, I> {
    /// Whether the transition was forced rather than guarded.
    pub fn is_forced(&self) -> bool {
        self.input.is_none()
    }

    /// Whether the machine re-entered the state it was already in.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

pub(crate) type Listener<S, I> = Rc<dyn Fn(&TransitionEvent<'_, S, I>)>;

/// Insertion-ordered listener list owned by one automaton.
pub(crate) struct Listeners<S: State, I> {
    entries: RefCell<Vec<(u64, Listener<S, I>)>>,
    next_id: Cell<u64>,
}

impl<S: State, I> Listeners<S, I> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub(crate) fn add(&self, listener: Listener<S, I>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Call every listener registered when dispatch starts, in order.
    ///
    /// The list is snapshotted first: listeners added or removed during the
    /// pass only take part from the next pass on. No borrow is held while
    /// a listener runs, so listeners may call back into the automaton.
    pub(crate) fn dispatch(&self, event: &TransitionEvent<'_, S, I>) {
        let snapshot: Vec<Listener<S, I>> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}

/// Handle returned by `subscribe`.
///
/// Dropping the handle leaves the listener registered; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
pub struct Subscription<S: State, I> {
    id: u64,
    listeners: Weak<Listeners<S, I>>,
    active: Cell<bool>,
}

impl<S: State, I> Subscription<S, I> {
    pub(crate) fn new(id: u64, listeners: Weak<Listeners<S, I>>) -> Self {
        Self {
            id,
            listeners,
            active: Cell::new(true),
        }
    }

    /// Remove the listener. Repeat calls do nothing.
    pub fn unsubscribe(&self) {
        if !self.active.replace(false) {
            return;
        }
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get() && self.listeners.strong_count() > 0
    }
}

impl<S: State, I> std::fmt::Debug for Subscription<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
