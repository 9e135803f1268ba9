//! State identifiers and the frozen set of legal states.
//!
//! A state is any small, cloneable, hashable token. Plain string identifiers
//! work out of the box; enums can opt in through the `state_enum!` macro.

use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;

/// Trait for state machine states.
///
/// States are identifiers: two values that compare equal name the same
/// state. They are never inspected beyond equality, hashing and `name`.
///
/// # Required Traits
///
/// - `Clone`: states are copied into events and history records
/// - `Eq` + `Hash`: states are looked up in the legal state set
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize`: states appear in exported blueprints and histories
///
/// # Example
///
/// ```rust
/// use mata::core::State;
/// use serde::Serialize;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("running".name(), "running");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Serialize + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// The frozen set of legal states of a schematic.
///
/// Iteration follows discovery order: explicit sources first, then the
/// targets of each source, then wildcard targets, each state listed once.
/// Once built, the set never changes.
///
/// # Example
///
/// ```rust
/// use mata::core::States;
///
/// let states = States::from_discovered(["empty", "running", "empty"]);
///
/// assert_eq!(states.len(), 2);
/// assert_eq!(states["running"], "running");
/// assert!(states.get("full").is_none());
/// ```
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct States<S: State> {
    ordered: Vec<S>,
    #[serde(skip)]
    lookup: HashSet<S>,
}

impl<S: State> States<S> {
    /// Build a set from states in discovery order, dropping repeats.
    pub fn from_discovered<It>(discovered: It) -> Self
    where
        It: IntoIterator<Item = S>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::new();
        for state in discovered {
            if lookup.insert(state.clone()) {
                ordered.push(state);
            }
        }
        Self { ordered, lookup }
    }

    /// Check whether `state` is legal.
    pub fn contains<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.contains(state)
    }

    /// Look up the canonical state for an identifier.
    pub fn get<Q>(&self, state: &Q) -> Option<&S>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup.get(state)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Names of every state, in discovery order.
    pub fn names(&self) -> Vec<String> {
        self.ordered.iter().map(|s| s.name().to_string()).collect()
    }
}

impl<S, Q> Index<&Q> for States<S>
where
    S: State + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    type Output = S;

    /// Panics if `state` is not a legal state, like `HashMap` indexing.
    fn index(&self, state: &Q) -> &S {
        self.get(state).expect("no such state in schematic")
    }
}

impl<'a, S: State> IntoIterator for &'a States<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: State> PartialEq for States<S> {
    /// Set equality; discovery order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.lookup == other.lookup
    }
}

impl<S: State> Eq for States<S> {}
