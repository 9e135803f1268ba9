//! Running state machines.
//!
//! An [`Automaton`] holds the current state of one instance of a
//! [`Schematic`](crate::schematic::Schematic), decides transitions for the
//! inputs it is given and notifies its listeners.
//!
//! # Key Concepts
//!
//! - **`next`**: wildcard rules first (unless shadowed by an explicit rule
//!   for the same pair), then the rules of the current state; first
//!   declared accepting guard wins
//! - **`force`**: unconditional move, validated per
//!   [`ForcePolicy`](crate::config::ForcePolicy)
//! - **Listeners**: called synchronously after each committed transition,
//!   from a snapshot of the listener list
//!
//! Everything here is single-threaded; share the schematic, not the
//! automaton.

mod error;
mod event;
mod machine;
mod recorder;

pub use error::AutomatonError;
pub use event::{Subscription, TransitionEvent};
pub use machine::{Automaton, WeakAutomaton};
pub use recorder::HistoryRecorder;
