//! Builder for constructing rule tables.

use crate::core::{Guard, State};
use crate::schematic::Ruleset;

/// Builder for constructing rulesets with a fluent API.
///
/// Declaring the same `(from, to)` pair twice replaces the guard while
/// keeping the pair's original position.
///
/// # Example
///
/// ```
/// use mata::builder::RulesetBuilder;
/// use mata::core::Guard;
///
/// struct Player {
///     lives: u32,
///     score: u32,
/// }
///
/// let rules = RulesetBuilder::new()
///     .rule("start", "stage_one", Guard::Continue)
///     .rule("start", "lost", Guard::Never)
///     .when("stage_one", "won", |p: &Player| p.score > 100)
///     .rule("lost", "start", Guard::Continue)
///     .from_any_when("lost", |p: &Player| p.lives == 0)
///     .build();
///
/// assert_eq!(rules.wildcard().len(), 1);
/// assert_eq!(rules.discover_states().len(), 4);
/// ```
pub struct RulesetBuilder<S: State, I> {
    rules: Ruleset<S, I>,
}

impl<S: State, I> RulesetBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            rules: Ruleset::default(),
        }
    }

    /// Declare a source state, with or without rules of its own.
    pub fn state(mut self, state: S) -> Self {
        self.rules.declare(state);
        self
    }

    /// Add a guarded rule from `from` to `to`.
    pub fn rule(mut self, from: S, to: S, guard: Guard<I>) -> Self {
        self.rules.insert(from, to, guard);
        self
    }

    /// Add a rule guarded by a closure.
    pub fn when<F>(self, from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.rule(from, to, Guard::when(predicate))
    }

    /// Add a rule that applies from any state.
    pub fn from_any(mut self, to: S, guard: Guard<I>) -> Self {
        self.rules.insert_wildcard(to, guard);
        self
    }

    /// Add a wildcard rule guarded by a closure.
    pub fn from_any_when<F>(self, to: S, predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.from_any(to, Guard::when(predicate))
    }

    /// Build the ruleset.
    pub fn build(self) -> Ruleset<S, I> {
        self.rules
    }
}

impl<S: State, I> Default for RulesetBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluent_api_builds_both_groups() {
        let rules: Ruleset<&'static str, u8> = RulesetBuilder::new()
            .state("empty")
            .when("running", "full", |tap: &u8| *tap == 0)
            .from_any_when("running", |tap: &u8| *tap > 0)
            .build();

        let sources: Vec<_> = rules.sources().map(|s| s.from).collect();
        assert_eq!(sources, vec!["empty", "running"]);
        assert_eq!(rules.wildcard()[0].to, "running");
        assert!(rules.has_rule(&"running", &"full"));
    }

    #[test]
    fn declaring_state_after_rules_keeps_them() {
        let rules: Ruleset<&'static str, ()> = RulesetBuilder::new()
            .rule("a", "b", Guard::Continue)
            .state("a")
            .build();

        assert_eq!(rules.rules_from(&"a").map(<[_]>::len), Some(1));
    }

    #[test]
    fn redeclared_wildcard_replaces_guard() {
        let rules: Ruleset<&'static str, ()> = RulesetBuilder::new()
            .from_any("x", Guard::Continue)
            .from_any("y", Guard::Continue)
            .from_any("x", Guard::Never)
            .build();

        let targets: Vec<_> = rules.wildcard().iter().map(|r| r.to).collect();
        assert_eq!(targets, vec!["x", "y"]);
        assert!(rules.wildcard()[0].guard.is_never());
    }
}
