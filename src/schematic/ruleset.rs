//! Declarative rule tables.
//!
//! A ruleset keeps explicit per-state rules and "from any state" wildcard
//! rules in two separate, insertion-ordered groups.

use crate::core::{Guard, State, States};
use std::collections::HashMap;
use tracing::trace;

/// A single guarded edge towards `to`.
#[derive(Debug)]
pub struct Rule<S: State, I> {
    pub to: S,
    pub guard: Guard<I>,
}

/// Every rule leaving one explicit source state, in declaration order.
#[derive(Debug)]
pub struct SourceRules<S: State, I> {
    pub from: S,
    pub rules: Vec<Rule<S, I>>,
}

impl<S: State, I> SourceRules<S, I> {
    fn find(&self, to: &S) -> Option<&Rule<S, I>> {
        self.rules.iter().find(|rule| &rule.to == to)
    }
}

/// Immutable rule table driving a schematic.
///
/// Built through [`RulesetBuilder`](crate::builder::RulesetBuilder).
#[derive(Debug)]
pub struct Ruleset<S: State, I> {
    per_state: Vec<SourceRules<S, I>>,
    wildcard: Vec<Rule<S, I>>,
    index: HashMap<S, usize>,
}

impl<S: State, I> Default for Ruleset<S, I> {
    fn default() -> Self {
        Self {
            per_state: Vec::new(),
            wildcard: Vec::new(),
            index: HashMap::new(),
        }
    }
}

fn upsert<S: State, I>(rules: &mut Vec<Rule<S, I>>, to: S, guard: Guard<I>) {
    match rules.iter_mut().find(|rule| rule.to == to) {
        Some(existing) => existing.guard = guard,
        None => rules.push(Rule { to, guard }),
    }
}

impl<S: State, I> Ruleset<S, I> {
    /// Declare `from` as an explicit source, returning its slot.
    pub(crate) fn declare(&mut self, from: S) -> usize {
        if let Some(&slot) = self.index.get(&from) {
            return slot;
        }
        let slot = self.per_state.len();
        self.index.insert(from.clone(), slot);
        self.per_state.push(SourceRules {
            from,
            rules: Vec::new(),
        });
        slot
    }

    /// Add or replace the `(from, to)` rule. A replaced rule keeps its
    /// original position.
    pub(crate) fn insert(&mut self, from: S, to: S, guard: Guard<I>) {
        let slot = self.declare(from);
        upsert(&mut self.per_state[slot].rules, to, guard);
    }

    /// Add or replace a wildcard rule towards `to`.
    pub(crate) fn insert_wildcard(&mut self, to: S, guard: Guard<I>) {
        upsert(&mut self.wildcard, to, guard);
    }

    /// Explicit sources in declaration order.
    pub fn sources(&self) -> impl Iterator<Item = &SourceRules<S, I>> {
        self.per_state.iter()
    }

    /// Rules leaving `from`, if `from` is an explicit source.
    pub fn rules_from(&self, from: &S) -> Option<&[Rule<S, I>]> {
        self.source(from).map(|source| source.rules.as_slice())
    }

    /// Rules that apply from any state.
    pub fn wildcard(&self) -> &[Rule<S, I>] {
        &self.wildcard
    }

    /// Guard of the explicit `(from, to)` rule.
    pub fn guard(&self, from: &S, to: &S) -> Option<&Guard<I>> {
        self.source(from)
            .and_then(|source| source.find(to))
            .map(|rule| &rule.guard)
    }

    /// Whether an explicit `(from, to)` rule exists.
    pub fn has_rule(&self, from: &S, to: &S) -> bool {
        self.guard(from, to).is_some()
    }

    pub fn rule_count(&self) -> usize {
        self.per_state.iter().map(|s| s.rules.len()).sum::<usize>() + self.wildcard.len()
    }

    /// Derive the legal state set: explicit sources, then their targets,
    /// then wildcard targets.
    pub fn discover_states(&self) -> States<S> {
        let sources = self.per_state.iter().map(|source| source.from.clone());
        let targets = self
            .per_state
            .iter()
            .flat_map(|source| source.rules.iter().map(|rule| rule.to.clone()));
        let wildcard = self.wildcard.iter().map(|rule| rule.to.clone());
        States::from_discovered(sources.chain(targets).chain(wildcard))
    }

    /// Decide the next state for `input` without committing anything.
    ///
    /// Wildcard rules are tried first, skipping any target that `from` has
    /// an explicit rule for. Then the rules of `from` are tried. Within each
    /// group the first declared guard that accepts wins, and no guard is
    /// evaluated after it.
    pub fn resolve(&self, from: &S, input: &I) -> Option<S> {
        let source = self.source(from);

        for rule in &self.wildcard {
            if source.is_some_and(|s| s.find(&rule.to).is_some()) {
                trace!(from = from.name(), to = rule.to.name(), "wildcard rule shadowed");
                continue;
            }
            let accepted = rule.guard.check(input);
            trace!(
                from = from.name(),
                to = rule.to.name(),
                guard = rule.guard.describe(),
                accepted,
                "evaluated wildcard guard"
            );
            if accepted {
                return Some(rule.to.clone());
            }
        }

        for rule in source.map(|s| s.rules.as_slice()).unwrap_or_default() {
            let accepted = rule.guard.check(input);
            trace!(
                from = from.name(),
                to = rule.to.name(),
                guard = rule.guard.describe(),
                accepted,
                "evaluated guard"
            );
            if accepted {
                return Some(rule.to.clone());
            }
        }

        trace!(from = from.name(), "no rule matched");
        None
    }

    fn source(&self, from: &S) -> Option<&SourceRules<S, I>> {
        self.index.get(from).map(|&slot| &self.per_state[slot])
    }
}
