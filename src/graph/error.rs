//! Error types for graph operations.

use super::VertexId;
use thiserror::Error;

/// Result type for graph operations.
pub type DagResult<T> = Result<T, DagError>;

/// Errors returned by [`Dag`](super::Dag) operations.
///
/// A failed operation never leaves the graph partially modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DagError {
    /// A referenced vertex id was never allocated by this graph.
    #[error("Vertex {id} does not exist")]
    UnknownVertex {
        /// The missing id
        id: VertexId,
    },

    /// An edge was refused because it would close a cycle.
    #[error("Edge {from} -> {to} creates a cycle")]
    CycleRejected {
        /// Source of the refused edge
        from: VertexId,
        /// Destination of the refused edge
        to: VertexId,
    },

    /// The edge set contains a cycle, so no topological order exists.
    #[error("Graph has a cycle: {remaining} vertices never became ready")]
    CycleDetected {
        /// Number of vertices left with undrained predecessors
        remaining: usize,
    },

    /// The graph has no vertices to present.
    #[error("No vertices in graph")]
    EmptyGraph,

    /// Writing a dump to an output stream failed.
    #[error("Failed to write graph dump: {reason}")]
    Write {
        /// Description of the underlying I/O failure
        reason: String,
    },
}

impl DagError {
    /// Creates an unknown vertex error.
    pub fn unknown_vertex(id: VertexId) -> Self {
        Self::UnknownVertex { id }
    }

    /// Creates a rejected-edge error.
    pub fn cycle_rejected(from: VertexId, to: VertexId) -> Self {
        Self::CycleRejected { from, to }
    }

    /// Creates a cycle detected error.
    pub fn cycle_detected(remaining: usize) -> Self {
        Self::CycleDetected { remaining }
    }

    /// Creates a write error from an I/O failure.
    pub fn write(err: &std::io::Error) -> Self {
        Self::Write {
            reason: err.to_string(),
        }
    }

    /// Returns `true` for both cycle variants.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleRejected { .. } | Self::CycleDetected { .. })
    }
}
