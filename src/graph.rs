//! Graph view of a schematic, for diagram layout and export.
//!
//! Strong edges are explicit per-state rules; weak edges come from the
//! wildcard group and only appear where no explicit rule for the same pair
//! exists. Rules guarded by [`Guard::Never`](crate::core::Guard::Never)
//! declare their target state but produce no edge. This holds for wildcard
//! rules too: a `Never` wildcard can never fire, so no weak edge is drawn for
//! it, unlike diagram tools that only filter `Never` from strong edges.

use crate::core::{State, States};
use crate::schematic::Schematic;
use serde::Serialize;
use thiserror::Error;

/// Whether an edge comes from an explicit rule or from the wildcard group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Strong,
    Weak,
}

/// A drawable transition between two states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<S: State> {
    pub from: S,
    pub to: S,
    pub kind: EdgeKind,
}

/// Errors that can occur when exporting a blueprint.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Serializable snapshot of a schematic's nodes and edges.
///
/// # Example
///
/// ```rust
/// use mata::builder::RulesetBuilder;
/// use mata::core::Guard;
/// use mata::graph::{Blueprint, EdgeKind};
/// use mata::schematic::Schematic;
///
/// let schematic: Schematic<&'static str, bool> = Schematic::new(
///     RulesetBuilder::new()
///         .rule("idle", "busy", Guard::Continue)
///         .state("busy")
///         .from_any_when("idle", |reset: &bool| *reset)
///         .build(),
/// );
///
/// let blueprint = Blueprint::of(&schematic);
/// assert_eq!(blueprint.edges.len(), 2);
/// assert_eq!(blueprint.edges[1].kind, EdgeKind::Weak);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blueprint<S: State> {
    pub states: States<S>,
    pub edges: Vec<Edge<S>>,
}

impl<S: State> Blueprint<S> {
    pub fn of<I>(schematic: &Schematic<S, I>) -> Self {
        Self {
            states: schematic.states().clone(),
            edges: edges(schematic),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string(self).map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::SerializationFailed(e.to_string()))
    }
}

/// Every strong edge in declaration order, followed by every weak edge.
pub fn edges<S: State, I>(schematic: &Schematic<S, I>) -> Vec<Edge<S>> {
    let rules = schematic.rules();

    let strong = rules.sources().flat_map(|source| {
        source
            .rules
            .iter()
            .filter(|rule| !rule.guard.is_never())
            .map(move |rule| Edge {
                from: source.from.clone(),
                to: rule.to.clone(),
                kind: EdgeKind::Strong,
            })
    });

    let weak = rules.sources().flat_map(|source| {
        rules
            .wildcard()
            .iter()
            .filter(|rule| !rule.guard.is_never())
            .filter(move |rule| rule.to != source.from && !rules.has_rule(&source.from, &rule.to))
            .map(move |rule| Edge {
                from: source.from.clone(),
                to: rule.to.clone(),
                kind: EdgeKind::Weak,
            })
    });

    strong.chain(weak).collect()
}

impl<S: State, I> Schematic<S, I> {
    /// Graph edges for diagramming. See [`edges`].
    pub fn edges(&self) -> Vec<Edge<S>> {
        edges(self)
    }

    pub fn blueprint(&self) -> Blueprint<S> {
        Blueprint::of(self)
    }
}
