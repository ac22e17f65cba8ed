//! Vertex handles and the records a [`Dag`](super::Dag) stores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a vertex, assigned sequentially from 0 by the owning graph.
///
/// Ids are never reused. A `VertexId` from one graph means nothing to another.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw index.
    ///
    /// Useful for addressing vertices by their known position; the graph still
    /// validates the id on every call.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A weighted vertex. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<W> {
    id: VertexId,
    weight: W,
}

impl<W> Vertex<W> {
    pub(crate) fn new(id: VertexId, weight: W) -> Self {
        Self { id, weight }
    }

    /// Returns the vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the vertex weight.
    pub fn weight(&self) -> &W {
        &self.weight
    }
}

/// A weighted directed edge `from -> to`.
///
/// Both endpoints are guaranteed to exist in the graph that owns the edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<W> {
    from: VertexId,
    to: VertexId,
    weight: W,
}

impl<W> Edge<W> {
    pub(crate) fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Source vertex.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Destination vertex.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Edge weight.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Returns `(from, to)`.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }
}
