//! Construction-time settings for a [`Dag`](super::Dag).

use serde::{Deserialize, Serialize};

/// How [`Dag::add_edge`](super::Dag::add_edge) decides whether a candidate edge
/// closes a cycle.
///
/// Both strategies accept and reject exactly the same edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleCheck {
    /// Run a full Kahn sort over the committed edges plus the candidate.
    ///
    /// O(V + E) per insertion.
    #[default]
    ShadowSort,
    /// Search for a path `to ->* from` over the committed edges.
    ///
    /// Only visits vertices reachable from the candidate's destination.
    Reachability,
}

/// Settings fixed for the lifetime of a graph.
///
/// ```
/// use wdag::{CycleCheck, DagConfig};
///
/// let config: DagConfig = serde_json::from_str(r#"{"cycle_check":"reachability"}"#).unwrap();
/// assert_eq!(config.cycle_check, CycleCheck::Reachability);
/// assert_eq!(config.capacity_hint, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DagConfig {
    /// Acyclicity check used on edge insertion.
    pub cycle_check: CycleCheck,
    /// Number of vertices and edges to preallocate room for.
    pub capacity_hint: usize,
}

impl DagConfig {
    /// Sets the cycle check strategy.
    #[must_use]
    pub fn with_cycle_check(mut self, cycle_check: CycleCheck) -> Self {
        self.cycle_check = cycle_check;
        self
    }

    /// Sets the preallocation hint.
    #[must_use]
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }
}
