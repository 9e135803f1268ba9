//! Core state machine types.
//!
//! This module contains the pure building blocks shared by schematics and
//! automatons:
//! - State identifiers via the `State` trait and the frozen `States` set
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in this module holds mutable state.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{State, States};
