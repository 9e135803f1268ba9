//! Running instances of a schematic.

use crate::automaton::error::AutomatonError;
use crate::automaton::event::{Listeners, Subscription, TransitionEvent};
use crate::config::ForcePolicy;
use crate::core::{State, States};
use crate::schematic::Schematic;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};
use uuid::Uuid;

struct Inner<S: State, I> {
    id: Uuid,
    schematic: Schematic<S, I>,
    current: RefCell<S>,
    listeners: Rc<Listeners<S, I>>,
}

/// A live, stateful instance of a [`Schematic`].
///
/// Automatons are single-threaded. Cloning yields another handle onto the
/// same instance, which lets listeners call back into the machine; use
/// [`downgrade`](Automaton::downgrade) inside listeners to avoid keeping the
/// machine alive through its own listener list.
///
/// # Example
///
/// ```rust
/// use mata::builder::RulesetBuilder;
/// use mata::core::Guard;
/// use mata::schematic::Schematic;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let schematic = Schematic::new(
///     RulesetBuilder::new()
///         .rule("green", "yellow", Guard::when(|t: &u32| *t >= 30))
///         .rule("yellow", "red", Guard::when(|t: &u32| *t >= 5))
///         .rule("red", "green", Guard::when(|t: &u32| *t >= 20))
///         .build(),
/// );
///
/// let light = schematic.create_automaton("green").unwrap();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
/// light.subscribe(move |event| log.borrow_mut().push((event.from, event.to)));
///
/// assert_eq!(light.next(&10), "green");
/// assert_eq!(light.next(&30), "yellow");
/// assert_eq!(*seen.borrow(), vec![("green", "yellow")]);
/// ```
pub struct Automaton<S: State, I> {
    inner: Rc<Inner<S, I>>,
}

/// Non-owning handle to an [`Automaton`].
pub struct WeakAutomaton<S: State, I> {
    inner: Weak<Inner<S, I>>,
}

impl<S: State, I> Automaton<S, I> {
    pub(crate) fn new(schematic: Schematic<S, I>, initial: S) -> Result<Self, AutomatonError> {
        if !schematic.states().contains(&initial) {
            return Err(AutomatonError::InvalidInitialState {
                state: initial.name().to_string(),
                known: schematic.states().names(),
            });
        }

        let id = Uuid::new_v4();
        debug!(automaton = %id, initial = initial.name(), "created automaton");

        Ok(Self {
            inner: Rc::new(Inner {
                id,
                schematic,
                current: RefCell::new(initial),
                listeners: Rc::new(Listeners::new()),
            }),
        })
    }

    /// Unique identifier of this instance.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Current state.
    pub fn state(&self) -> S {
        self.inner.current.borrow().clone()
    }

    /// Legal states of the underlying schematic.
    pub fn states(&self) -> &States<S> {
        self.inner.schematic.states()
    }

    pub fn schematic(&self) -> &Schematic<S, I> {
        &self.inner.schematic
    }

    /// Move to `state` unconditionally and notify every listener with an
    /// event carrying no input.
    ///
    /// Under [`ForcePolicy::Strict`] an unknown target is rejected before
    /// anything changes. Returns the new state.
    pub fn force(&self, state: S) -> Result<S, AutomatonError> {
        let schematic = &self.inner.schematic;
        if schematic.config().force_policy == ForcePolicy::Strict
            && !schematic.states().contains(&state)
        {
            warn!(
                automaton = %self.inner.id,
                state = state.name(),
                "rejected force to unknown state"
            );
            return Err(AutomatonError::InvalidForcedState {
                state: state.name().to_string(),
                known: schematic.states().names(),
            });
        }
        Ok(self.commit(state, None))
    }

    /// Evaluate `input` against the rules and transition on the first
    /// accepting guard.
    ///
    /// Returns the resulting state. When nothing matches, no event is
    /// emitted and the current state is returned unchanged.
    pub fn next(&self, input: &I) -> S {
        let from = self.state();
        match self.inner.schematic.rules().resolve(&from, input) {
            Some(to) => self.commit(to, Some(input)),
            None => {
                trace!(automaton = %self.inner.id, state = from.name(), "input ignored");
                from
            }
        }
    }

    /// The state `next(input)` would move to, without moving.
    pub fn peek(&self, input: &I) -> Option<S> {
        self.inner.schematic.rules().resolve(&self.state(), input)
    }

    /// Register a listener for every committed transition.
    ///
    /// Listeners run synchronously in subscription order once the new state
    /// is committed. A panicking listener propagates to the caller of
    /// `next`/`force` and later listeners of that pass are skipped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription<S, I>
    where
        F: Fn(&TransitionEvent<'_, S, I>) + 'static,
    {
        let id = self.inner.listeners.add(Rc::new(listener));
        Subscription::new(id, Rc::downgrade(&self.inner.listeners))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }

    pub fn downgrade(&self) -> WeakAutomaton<S, I> {
        WeakAutomaton {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether two handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn commit(&self, to: S, input: Option<&I>) -> S {
        let from = self.inner.current.replace(to.clone());
        debug!(
            automaton = %self.inner.id,
            from = from.name(),
            to = to.name(),
            forced = input.is_none(),
            "transition"
        );
        let event = TransitionEvent {
            from,
            to: to.clone(),
            input,
        };
        self.inner.listeners.dispatch(&event);
        to
    }
}

impl<S: State, I> WeakAutomaton<S, I> {
    pub fn upgrade(&self) -> Option<Automaton<S, I>> {
        self.inner.upgrade().map(|inner| Automaton { inner })
    }
}

impl<S: State, I> Clone for Automaton<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: State, I> Clone for WeakAutomaton<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<S: State, I> fmt::Debug for Automaton<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("id", &self.inner.id)
            .field("state", &*self.inner.current.borrow())
            .field("subscribers", &self.inner.listeners.len())
            .finish()
    }
}
