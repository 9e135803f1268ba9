//! Property-based tests for schematics and automatons.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated rule tables and inputs.

use mata::{ForcePolicy, Guard, RulesetBuilder, Schematic, SchematicConfig};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// A rule whose guard accepts inputs at or above `threshold`.
#[derive(Clone, Debug)]
struct RuleSpec {
    from: Option<usize>,
    to: usize,
    threshold: u8,
}

prop_compose! {
    fn arbitrary_rule()(
        from in prop::option::weighted(0.8, 0..NAMES.len()),
        to in 0..NAMES.len(),
        threshold in 0..10u8,
    ) -> RuleSpec {
        RuleSpec { from, to, threshold }
    }
}

fn build(rules: &[RuleSpec]) -> Schematic<&'static str, u8> {
    Schematic::new(build_rules(rules))
}

proptest! {
    #[test]
    fn states_are_union_of_rule_keys(rules in prop::collection::vec(arbitrary_rule(), 0..12)) {
        let schematic = build(&rules);

        let mut expected = HashSet::new();
        for rule in &rules {
            if let Some(from) = rule.from {
                expected.insert(NAMES[from]);
            }
            expected.insert(NAMES[rule.to]);
        }

        let actual: HashSet<&'static str> = schematic.states().iter().copied().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn next_is_deterministic(
        rules in prop::collection::vec(arbitrary_rule(), 1..12),
        input in 0..10u8,
    ) {
        let schematic = build(&rules);
        for &start in schematic.states().iter() {
            let first = schematic.create_automaton(start).unwrap();
            let second = schematic.create_automaton(start).unwrap();
            prop_assert_eq!(first.next(&input), second.next(&input));
        }
    }

    #[test]
    fn first_declared_match_wins(
        targets in prop::collection::vec(1..NAMES.len(), 1..5),
        input in 0..10u8,
    ) {
        let schematic: Schematic<&'static str, u8> = Schematic::new(
            targets
                .iter()
                .fold(RulesetBuilder::new(), |builder, &to| {
                    builder.rule("a", NAMES[to], Guard::Continue)
                })
                .build(),
        );
        let machine = schematic.create_automaton("a").unwrap();
        prop_assert_eq!(machine.next(&input), NAMES[targets[0]]);
    }

    #[test]
    fn wildcard_never_overrides_explicit_pair(
        explicit in 0..10u8,
        wildcard in 0..10u8,
        input in 0..10u8,
    ) {
        let schematic: Schematic<&'static str, u8> = Schematic::new(
            RulesetBuilder::new()
                .when("a", "b", move |i: &u8| *i >= explicit)
                .when("b", "a", |_: &u8| false)
                .from_any_when("b", move |i: &u8| *i >= wildcard)
                .build(),
        );
        let machine = schematic.create_automaton("a").unwrap();

        let expected = if input >= explicit { "b" } else { "a" };
        prop_assert_eq!(machine.next(&input), expected);
    }

    #[test]
    fn unmatched_next_never_notifies(
        rules in prop::collection::vec(arbitrary_rule(), 1..12),
        input in 0..10u8,
    ) {
        let schematic = build(&rules);
        for &start in schematic.states().iter() {
            let machine = schematic.create_automaton(start).unwrap();
            let notified = Rc::new(Cell::new(0usize));
            let counter = Rc::clone(&notified);
            machine.subscribe(move |_| counter.set(counter.get() + 1));

            let predicted = machine.peek(&input);
            let state = machine.next(&input);

            match predicted {
                Some(to) => {
                    prop_assert_eq!(state, to);
                    prop_assert_eq!(notified.get(), 1);
                }
                None => {
                    prop_assert_eq!(state, start);
                    prop_assert_eq!(notified.get(), 0);
                }
            }
        }
    }

    #[test]
    fn force_always_notifies_once(
        rules in prop::collection::vec(arbitrary_rule(), 1..12),
        target in 0..NAMES.len(),
    ) {
        let schematic = Schematic::with_config(
            build_rules(&rules),
            SchematicConfig::new().with_force_policy(ForcePolicy::Permissive),
        );
        let start = *schematic.states().iter().next().unwrap();
        let machine = schematic.create_automaton(start).unwrap();
        let forced = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&forced);
        machine.subscribe(move |event| {
            assert!(event.is_forced());
            counter.set(counter.get() + 1);
        });

        prop_assert_eq!(machine.force(NAMES[target]).unwrap(), NAMES[target]);
        prop_assert_eq!(forced.get(), 1);
    }

    #[test]
    fn strict_force_fails_atomically(
        rules in prop::collection::vec(arbitrary_rule(), 1..12),
        target in 0..NAMES.len(),
    ) {
        let schematic = build(&rules);
        let start = *schematic.states().iter().next().unwrap();
        let machine = schematic.create_automaton(start).unwrap();

        let known = schematic.states().contains(NAMES[target]);
        let result = machine.force(NAMES[target]);

        prop_assert_eq!(result.is_ok(), known);
        if !known {
            prop_assert_eq!(machine.state(), start);
        }
    }
}

fn build_rules(rules: &[RuleSpec]) -> mata::Ruleset<&'static str, u8> {
    rules
        .iter()
        .fold(RulesetBuilder::new(), |builder, rule| {
            let threshold = rule.threshold;
            let guard = Guard::when(move |input: &u8| *input >= threshold);
            match rule.from {
                Some(from) => builder.rule(NAMES[from], NAMES[rule.to], guard),
                None => builder.from_any(NAMES[rule.to], guard),
            }
        })
        .build()
}
