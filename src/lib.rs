//! Mata: a tiny declarative finite state machine library
//!
//! A [`Schematic`] is built once from a table of guarded rules and derives
//! the set of legal states from it. Any number of [`Automaton`] instances
//! can then run against the same schematic, each advancing through inputs
//! and notifying its own listeners.
//!
//! # Core Concepts
//!
//! - **State**: a string-like identifier, discovered from the rule table
//! - **Guards**: predicates over an input value, plus the reserved
//!   `Continue` and `Never` guards
//! - **Wildcard rules**: rules that apply from any state unless the current
//!   state has its own rule for the same target
//! - **Listeners**: synchronous callbacks receiving each committed
//!   [`TransitionEvent`]
//!
//! # Example
//!
//! ```rust
//! use mata::{Guard, RulesetBuilder, Schematic};
//!
//! struct Sink {
//!     tap: u32,
//!     drainable: bool,
//! }
//!
//! let schematic = Schematic::new(
//!     RulesetBuilder::new()
//!         .from_any_when("running", |s: &Sink| s.tap > 0)
//!         .state("empty")
//!         .when("running", "full", |s: &Sink| s.tap == 0 && !s.drainable)
//!         .when("running", "draining", |s: &Sink| s.tap == 0 && s.drainable)
//!         .when("full", "draining", |s: &Sink| s.drainable)
//!         .rule("draining", "empty", Guard::Continue)
//!         .build(),
//! );
//!
//! let sink = schematic.create_automaton("empty").unwrap();
//! assert_eq!(sink.next(&Sink { tap: 1, drainable: true }), "running");
//! assert_eq!(sink.next(&Sink { tap: 0, drainable: true }), "draining");
//! assert_eq!(sink.next(&Sink { tap: 0, drainable: true }), "empty");
//! ```

pub mod automaton;
pub mod builder;
pub mod config;
pub mod core;
pub mod graph;
pub mod schematic;

// Re-export commonly used types
pub use automaton::{Automaton, AutomatonError, Subscription, TransitionEvent};
pub use builder::RulesetBuilder;
pub use config::{ForcePolicy, SchematicConfig};
pub use core::{Guard, State, States};
pub use schematic::{Ruleset, Schematic};
