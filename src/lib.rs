//! # `wdag` - Weighted Directed Acyclic Graphs
//!
//! An append-only graph of weighted vertices and weighted edges that refuses
//! any edge which would introduce a cycle, orders its vertices with Kahn's
//! algorithm, and evaluates the weight of the longest path between two
//! vertices by dynamic programming over that order.
//!
//! ## Guarantees
//!
//! - **Acyclic at all times**: the invariant is checked before an edge is
//!   committed, never repaired afterwards.
//! - **Atomic rejection**: a refused edge changes no vertex, edge or id state.
//! - **Deterministic order**: vertices that become ready together are emitted in
//!   ascending id order.
//! - **No panics on queries**: empty or partial graphs report empty results or
//!   errors.
//!
//! ## Architecture
//!
//! 1. **Weights** ([`Weight`]): the capability contract for costs. Integers
//!    and the textual [`ReverseDigit`] ship as implementations.
//! 2. **Store** ([`Dag`]): an arena of vertices addressed by [`VertexId`] plus
//!    an insertion-ordered edge list. Nothing outside the graph holds
//!    references into it.
//! 3. **Sorter**: Kahn's algorithm over the edge endpoints, also used as the
//!    cycle oracle for insertion ([`CycleCheck::ShadowSort`]).
//! 4. **Evaluator**: longest path over the topological order.
//! 5. **Presentation**: line dumps and JSON snapshots.
//!
//! ## Logging
//!
//! Mutations and rejections are reported through `tracing`. The library never
//! installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use wdag::{Dag, DagError, VertexId};
//!
//! let mut dag = Dag::new();
//! let v: Vec<_> = (0..6).map(|_| dag.add_vertex(2)).collect();
//!
//! dag.add_edge(v[0], v[1], 4)?;
//! dag.add_edge(v[1], v[2], 4)?;
//! dag.add_edge(v[3], v[2], 4)?;
//! dag.add_edge(v[0], v[2], 4)?;
//! dag.add_edge(v[2], v[4], 4)?;
//!
//! assert!(matches!(dag.add_edge(v[4], v[1], 5), Err(DagError::CycleRejected { .. })));
//! let order = dag.topological_sort()?;
//! let pos = |id: VertexId| order.iter().position(|&x| x == id).unwrap();
//! assert!(dag.edges().iter().all(|e| pos(e.from()) < pos(e.to())));
//! assert_eq!(dag.longest_path(v[0], v[4])?, "20");
//! # Ok::<(), DagError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod weight;

pub use graph::{CycleCheck, Dag, DagConfig, DagError, DagResult, Edge, Vertex, VertexId};
pub use weight::{ReverseDigit, Weight};

// Compile-time layout checks
const _: () = {
    use core::mem;

    // Handles are plain indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= mem::size_of::<usize>() * 2);
};
