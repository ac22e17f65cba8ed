//! The graph store: an append-only weighted DAG.
//!
//! Vertices live in an arena indexed by [`VertexId`]; edges live in a list in
//! insertion order. Per-vertex incoming and outgoing edge-index lists are kept
//! alongside so both directions can be walked without scanning every edge.
//!
//! The acyclicity invariant is enforced when an edge is inserted: a candidate
//! edge is checked first and committed only if the result is still a DAG, so a
//! rejected edge leaves the graph untouched.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | |
//! | `add_edge` | \(O(n + m)\) | `ShadowSort`; `Reachability` visits only what `to` reaches |
//! | `topological_sort` | \(O(n + m)\) | Kahn's algorithm, rounds in ascending id |
//! | `longest_path` | \(O(n + m)\) | DP over the topological order |
//!
//! ### Threading
//! A `Dag` has no internal locking. Mutation from several threads must be
//! serialized by the caller.

use super::config::{CycleCheck, DagConfig};
use super::error::{DagError, DagResult};
use super::topo;
use super::vertex::{Edge, Vertex, VertexId};
use tracing::{debug, warn};

mod math_assert;

use math_assert::invariant_assert_msg;

/// A weighted directed acyclic graph.
///
/// # Example
///
/// ```
/// use wdag::Dag;
///
/// let mut dag = Dag::new();
/// let a = dag.add_vertex(2);
/// let b = dag.add_vertex(2);
/// dag.add_edge(a, b, 4).unwrap();
///
/// // b -> a would close a cycle and is refused.
/// assert!(dag.add_edge(b, a, 1).is_err());
/// assert_eq!(dag.edge_count(), 1);
/// assert_eq!(dag.topological_sort().unwrap(), vec![a, b]);
/// ```
#[derive(Debug, Clone)]
pub struct Dag<W> {
    config: DagConfig,
    vertices: Vec<Vertex<W>>,
    edges: Vec<Edge<W>>,
    /// Indices into `edges`, per source vertex, in insertion order.
    outgoing: Vec<Vec<usize>>,
    /// Indices into `edges`, per destination vertex, in insertion order.
    incoming: Vec<Vec<usize>>,
}

impl<W> Default for Dag<W> {
    fn default() -> Self {
        Self::with_config(DagConfig::default())
    }
}

impl<W> Dag<W> {
    /// Creates an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given configuration.
    pub fn with_config(config: DagConfig) -> Self {
        let cap = config.capacity_hint;
        Self {
            config,
            vertices: Vec::with_capacity(cap),
            edges: Vec::with_capacity(cap),
            outgoing: Vec::with_capacity(cap),
            incoming: Vec::with_capacity(cap),
        }
    }

    /// Returns the configuration the graph was built with.
    pub fn config(&self) -> &DagConfig {
        &self.config
    }

    /// Adds a vertex and returns its freshly allocated id.
    pub fn add_vertex(&mut self, weight: W) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(id, weight));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        debug!(%id, "vertex added");
        id
    }

    /// Adds the edge `from -> to`.
    ///
    /// # Errors
    /// - [`DagError::UnknownVertex`] if either endpoint does not exist
    /// - [`DagError::CycleRejected`] if the edge would close a cycle (self-loops included)
    ///
    /// On error the graph is unchanged.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> DagResult<()> {
        for id in [from, to] {
            if !self.contains_vertex(id) {
                warn!(%from, %to, missing = %id, "edge rejected: unknown vertex");
                return Err(DagError::unknown_vertex(id));
            }
        }

        if self.closes_cycle(from, to) {
            warn!(%from, %to, strategy = ?self.config.cycle_check, "edge rejected: creates cycle");
            return Err(DagError::cycle_rejected(from, to));
        }

        let index = self.edges.len();
        self.edges.push(Edge::new(from, to, weight));
        self.outgoing[from.index()].push(index);
        self.incoming[to.index()].push(index);
        debug!(%from, %to, edges = self.edges.len(), "edge committed");

        if cfg!(debug_assertions) {
            invariant_assert_msg(
                self.validate_invariants(),
                "store inconsistent after edge commit",
            );
        }
        Ok(())
    }

    /// Decides whether `from -> to` would close a cycle, without mutating anything.
    fn closes_cycle(&self, from: VertexId, to: VertexId) -> bool {
        match self.config.cycle_check {
            CycleCheck::ShadowSort => {
                let candidate = self.edge_endpoints().chain(std::iter::once((from, to)));
                topo::kahn_order(self.vertices.len(), candidate).is_err()
            }
            CycleCheck::Reachability => {
                from == to
                    || topo::reaches(self.vertices.len(), to, from, |u| {
                        self.successor_iter(u)
                    })
            }
        }
    }

    /// Returns the vertex with the given id.
    ///
    /// # Errors
    /// [`DagError::UnknownVertex`] if the id was never allocated.
    pub fn vertex(&self, id: VertexId) -> DagResult<&Vertex<W>> {
        self.vertices
            .get(id.index())
            .ok_or_else(|| DagError::unknown_vertex(id))
    }

    /// Returns `true` if the id was allocated by this graph.
    #[inline]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// All vertices in ascending id order.
    pub fn vertices(&self) -> &[Vertex<W>] {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sources of the edges entering `id`, in edge insertion order.
    ///
    /// Parallel edges yield the same source more than once.
    ///
    /// # Errors
    /// [`DagError::UnknownVertex`] if the id was never allocated.
    pub fn predecessors(&self, id: VertexId) -> DagResult<Vec<VertexId>> {
        self.vertex(id)?;
        Ok(self.incoming_edges(id).map(|e| e.from()).collect())
    }

    /// Destinations of the edges leaving `id`, in edge insertion order.
    ///
    /// # Errors
    /// [`DagError::UnknownVertex`] if the id was never allocated.
    pub fn successors(&self, id: VertexId) -> DagResult<Vec<VertexId>> {
        self.vertex(id)?;
        Ok(self.successor_iter(id).collect())
    }

    /// Edges entering `id`, in insertion order. `id` must exist.
    pub(crate) fn incoming_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.incoming[id.index()].iter().map(move |&e| &self.edges[e])
    }

    /// Returns `true` if `id` is neither the source nor the destination of any edge.
    pub(crate) fn is_isolated(&self, id: VertexId) -> bool {
        self.incoming[id.index()].is_empty() && self.outgoing[id.index()].is_empty()
    }

    fn successor_iter(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing[id.index()].iter().map(move |&e| self.edges[e].to())
    }

    fn edge_endpoints(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().map(Edge::endpoints)
    }

    /// Computes a topological ordering with Kahn's algorithm.
    ///
    /// Vertices that become ready in the same round are emitted in ascending id
    /// order, so the result is deterministic. An empty graph yields an empty order.
    ///
    /// # Errors
    /// [`DagError::CycleDetected`] if the edge set is cyclic. Unreachable for a
    /// graph built through [`add_edge`](Self::add_edge).
    pub fn topological_sort(&self) -> DagResult<Vec<VertexId>> {
        topo::kahn_order(self.vertices.len(), self.edge_endpoints())
    }

    /// Checks acyclicity by attempting a topological sort.
    pub fn is_acyclic(&self) -> bool {
        self.topological_sort().is_ok()
    }

    /// Validates the structural invariants of the store.
    ///
    /// Checks that:
    /// 1. Every vertex sits at the arena slot matching its id
    /// 2. Every edge endpoint exists
    /// 3. The incoming and outgoing index lists describe exactly the edge list
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertices.len();

        if self.outgoing.len() != n || self.incoming.len() != n {
            return false;
        }

        if self.vertices.iter().enumerate().any(|(i, v)| v.id().index() != i) {
            return false;
        }

        if self
            .edges
            .iter()
            .any(|e| e.from().index() >= n || e.to().index() >= n)
        {
            return false;
        }

        let mut seen_out = vec![false; self.edges.len()];
        let mut seen_in = vec![false; self.edges.len()];
        for u in 0..n {
            for &e in &self.outgoing[u] {
                match self.edges.get(e) {
                    Some(edge) if edge.from().index() == u && !seen_out[e] => seen_out[e] = true,
                    _ => return false,
                }
            }
            for &e in &self.incoming[u] {
                match self.edges.get(e) {
                    Some(edge) if edge.to().index() == u && !seen_in[e] => seen_in[e] = true,
                    _ => return false,
                }
            }
        }

        seen_out.iter().all(|&s| s) && seen_in.iter().all(|&s| s)
    }
}
