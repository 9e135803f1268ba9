//! Builder API for declaring rule tables.
//!
//! This module provides a fluent builder and a macro for declaring state
//! machines with minimal boilerplate.

pub mod macros;
pub mod ruleset;

pub use ruleset::RulesetBuilder;

use crate::core::{Guard, State};
use crate::schematic::Schematic;

/// Build a schematic whose every rule is unconditional.
///
/// Each `(from, to)` pair becomes a [`Guard::Continue`] rule, in order.
///
/// # Example
///
/// ```
/// use mata::builder::linear;
///
/// let pipeline = linear::<_, ()>([("fetch", "build"), ("build", "deploy")]);
/// let run = pipeline.create_automaton("fetch").unwrap();
///
/// assert_eq!(run.next(&()), "build");
/// assert_eq!(run.next(&()), "deploy");
/// assert_eq!(run.next(&()), "deploy");
/// ```
pub fn linear<S, I>(pairs: impl IntoIterator<Item = (S, S)>) -> Schematic<S, I>
where
    S: State,
{
    let builder = pairs
        .into_iter()
        .fold(RulesetBuilder::new(), |builder, (from, to)| {
            builder.rule(from, to, Guard::Continue)
        });
    Schematic::new(builder.build())
}
