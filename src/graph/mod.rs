//! Weighted DAG store and the algorithms that read it.
//!
//! - `dag`: the store, with cycle-rejecting edge insertion
//! - `topo`: Kahn's algorithm, also the acyclicity oracle for insertion
//! - `longest_path`: DP over the topological order
//! - `render`: text and structured dumps

mod config;
mod dag;
mod error;
mod longest_path;
mod render;
mod topo;
mod vertex;

pub use config::{CycleCheck, DagConfig};
pub use dag::Dag;
pub use error::{DagError, DagResult};
pub use vertex::{Edge, Vertex, VertexId};
