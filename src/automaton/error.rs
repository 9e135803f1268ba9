//! Automaton errors.

use thiserror::Error;

/// Errors raised when an automaton is asked to occupy an unknown state.
///
/// Both variants are raised before any state is committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    #[error("Invalid initial state: \"{state}\" - known states: [{}]", .known.join(", "))]
    InvalidInitialState { state: String, known: Vec<String> },

    #[error("Invalid forced state: \"{state}\" - known states: [{}]", .known.join(", "))]
    InvalidForcedState { state: String, known: Vec<String> },
}

impl AutomatonError {
    /// Name of the offending state.
    pub fn state(&self) -> &str {
        match self {
            Self::InvalidInitialState { state, .. } | Self::InvalidForcedState { state, .. } => {
                state
            }
        }
    }

    /// Names of the states the schematic does know.
    pub fn known_states(&self) -> &[String] {
        match self {
            Self::InvalidInitialState { known, .. } | Self::InvalidForcedState { known, .. } => {
                known
            }
        }
    }
}
