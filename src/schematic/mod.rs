//! Immutable, validated state machine definitions.
//!
//! A [`Schematic`] owns a [`Ruleset`] and the state set derived from it.
//! It is read-only after construction and can be shared by any number of
//! automatons; cloning a schematic only clones a handle.
//!
//! # Example
//!
//! ```rust
//! use mata::builder::RulesetBuilder;
//! use mata::core::Guard;
//! use mata::schematic::Schematic;
//!
//! let schematic = Schematic::new(
//!     RulesetBuilder::new()
//!         .rule("draft", "review", Guard::when(|ready: &bool| *ready))
//!         .rule("review", "published", Guard::Continue)
//!         .build(),
//! );
//!
//! assert_eq!(schematic.states().len(), 3);
//!
//! let post = schematic.create_automaton("draft").unwrap();
//! assert_eq!(post.next(&true), "review");
//! ```

mod ruleset;

pub use ruleset::{Rule, Ruleset, SourceRules};

use crate::automaton::{Automaton, AutomatonError};
use crate::config::SchematicConfig;
use crate::core::{State, States};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

struct Inner<S: State, I> {
    rules: Ruleset<S, I>,
    states: States<S>,
    config: SchematicConfig,
}

/// The declared shape of a state machine: its rules and legal states.
pub struct Schematic<S: State, I> {
    inner: Arc<Inner<S, I>>,
}

impl<S: State, I> Schematic<S, I> {
    /// Build a schematic with the default configuration.
    ///
    /// Construction never fails: every state a rule mentions becomes legal.
    pub fn new(rules: Ruleset<S, I>) -> Self {
        Self::with_config(rules, SchematicConfig::default())
    }

    pub fn with_config(rules: Ruleset<S, I>, config: SchematicConfig) -> Self {
        let states = rules.discover_states();
        debug!(
            states = states.len(),
            rules = rules.rule_count(),
            force_policy = ?config.force_policy,
            "built schematic"
        );
        Self {
            inner: Arc::new(Inner {
                rules,
                states,
                config,
            }),
        }
    }

    /// Every legal state, in discovery order.
    pub fn states(&self) -> &States<S> {
        &self.inner.states
    }

    /// The rule table this schematic was built from.
    pub fn rules(&self) -> &Ruleset<S, I> {
        &self.inner.rules
    }

    pub fn config(&self) -> &SchematicConfig {
        &self.inner.config
    }

    /// Create a running instance seeded at `initial`.
    ///
    /// Fails with [`AutomatonError::InvalidInitialState`] when `initial` is
    /// not a legal state. No listener can observe construction.
    pub fn create_automaton(&self, initial: S) -> Result<Automaton<S, I>, AutomatonError> {
        Automaton::new(self.clone(), initial)
    }

    /// Whether two handles refer to the same schematic.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: State, I> Clone for Schematic<S, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, I> fmt::Debug for Schematic<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schematic")
            .field("states", &self.inner.states)
            .field("rules", &self.inner.rules.rule_count())
            .field("config", &self.inner.config)
            .finish()
    }
}
