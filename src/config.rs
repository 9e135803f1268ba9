//! Schematic configuration.
//!
//! Configuration is plain serde data so hosts can keep it next to their
//! own settings and parse it from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How `force` treats a target state that the schematic does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForcePolicy {
    /// Reject unknown targets before mutating the current state.
    #[default]
    Strict,

    /// Commit any target, known or not.
    Permissive,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse failed: {0}")]
    Parse(String),
}

/// Settings shared by every automaton created from one schematic.
///
/// # Example
///
/// ```rust
/// use mata::config::{ForcePolicy, SchematicConfig};
///
/// let config = SchematicConfig::from_json(r#"{ "force_policy": "permissive" }"#).unwrap();
/// assert_eq!(config.force_policy, ForcePolicy::Permissive);
///
/// let defaults = SchematicConfig::from_json("{}").unwrap();
/// assert_eq!(defaults, SchematicConfig::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicConfig {
    pub force_policy: ForcePolicy,
}

impl SchematicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the force policy.
    pub fn with_force_policy(mut self, policy: ForcePolicy) -> Self {
        self.force_policy = policy;
        self
    }

    /// Parse configuration from a JSON document. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
