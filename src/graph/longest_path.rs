//! Longest-path evaluation by dynamic programming over the topological order.
//!
//! ## Accumulation rule
//!
//! Every vertex starts at its weight's additive identity. Walking the
//! topological order, each edge `p -> u` whose source was reached from the
//! start vertex proposes
//!
//! ```text
//! distance[p] + weight(p) + weight(p -> u)
//! ```
//!
//! and replaces `distance[u]` when strictly greater, marking `u` as adjusted.
//! Once the walk ends, every adjusted vertex adds its own weight one more time.
//! For a chain this is the sum of every vertex and edge weight on the path;
//! across branching paths the post-hoc term is applied after the fact, so a
//! relaxed intermediate vertex contributes through `weight(p)` only. Callers
//! relying on a different accumulation should project weights through
//! [`Dag::longest_path_by`].

use super::dag::Dag;
use super::error::DagResult;
use super::vertex::VertexId;
use crate::weight::Weight;
use tracing::trace;

impl<W: Weight> Dag<W> {
    /// Weight of the longest path `from ->* to`, rendered with [`Weight::display`].
    ///
    /// If `to` is not reachable from `from` (or `from == to`) the result is the
    /// zero weight, not an error.
    ///
    /// # Errors
    /// - [`DagError::UnknownVertex`](super::DagError::UnknownVertex) if either id does not exist
    /// - [`DagError::CycleDetected`](super::DagError::CycleDetected) if no topological order exists
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
    /// assert_eq!(dag.longest_path(a, b).unwrap(), "8");
    /// assert_eq!(dag.longest_path(b, a).unwrap(), "0");
    /// ```
    pub fn longest_path(&self, from: VertexId, to: VertexId) -> DagResult<String> {
        self.longest_path_weight(from, to).map(|w| w.display())
    }

    /// Weight of the longest path `from ->* to`.
    ///
    /// # Errors
    /// Same as [`longest_path`](Self::longest_path).
    pub fn longest_path_weight(&self, from: VertexId, to: VertexId) -> DagResult<W> {
        self.longest_path_by(from, to, W::clone, W::clone)
    }

    /// Longest path with caller-supplied projections.
    ///
    /// `vertex_fn` is applied to the predecessor's weight and `edge_fn` to the
    /// edge weight before they enter a candidate distance. The post-hoc
    /// destination term uses the vertex weight unprojected.
    ///
    /// # Errors
    /// Same as [`longest_path`](Self::longest_path).
    pub fn longest_path_by<F, G>(
        &self,
        from: VertexId,
        to: VertexId,
        mut vertex_fn: F,
        mut edge_fn: G,
    ) -> DagResult<W>
    where
        F: FnMut(&W) -> W,
        G: FnMut(&W) -> W,
    {
        self.vertex(from)?;
        self.vertex(to)?;
        let order = self.topological_sort()?;

        let n = self.vertex_count();
        let mut distance: Vec<W> = self
            .vertices()
            .iter()
            .map(|v| v.weight().zero_like())
            .collect();
        let mut reached = vec![false; n];
        let mut adjusted = vec![false; n];
        reached[from.index()] = true;

        for &u in &order {
            for edge in self.incoming_edges(u) {
                let p = edge.from();
                if !reached[p.index()] {
                    continue;
                }
                reached[u.index()] = true;

                let pred_weight = self.vertices()[p.index()].weight();
                let step = vertex_fn(pred_weight).add(&edge_fn(edge.weight()));
                let candidate = distance[p.index()].add(&step);
                if candidate.greater_than(&distance[u.index()]) {
                    trace!(%p, %u, candidate = %candidate.display(), "relaxed");
                    distance[u.index()] = candidate;
                    adjusted[u.index()] = true;
                }
            }
        }

        for (i, vertex) in self.vertices().iter().enumerate() {
            if adjusted[i] {
                distance[i] = distance[i].add(vertex.weight());
            }
        }

        Ok(distance.swap_remove(to.index()))
    }
}
