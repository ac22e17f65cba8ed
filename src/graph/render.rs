//! Human-readable dumps of a graph.
//!
//! Line formats:
//! - isolated vertex: `(id:5,w:2)`
//! - edge: `(id:0,w:2) -4-> (id:1,w:2)`
//!
//! Isolated vertices come first in ascending id order, followed by every edge in
//! insertion order.

use super::dag::Dag;
use super::error::{DagError, DagResult};
use super::vertex::Vertex;
use crate::weight::Weight;
use serde::Serialize;
use std::io;

fn vertex_label<W: Weight>(vertex: &Vertex<W>) -> String {
    format!("(id:{},w:{})", vertex.id(), vertex.weight().display())
}

impl<W: Weight> Dag<W> {
    /// Renders the graph as lines of text.
    ///
    /// # Errors
    /// [`DagError::EmptyGraph`] if the graph has no vertices.
    pub fn dump(&self) -> DagResult<Vec<String>> {
        if self.is_empty() {
            return Err(DagError::EmptyGraph);
        }

        let isolated = self
            .vertices()
            .iter()
            .filter(|v| self.is_isolated(v.id()))
            .map(vertex_label);

        let edges = self.edges().iter().map(|e| {
            let from = &self.vertices()[e.from().index()];
            let to = &self.vertices()[e.to().index()];
            format!(
                "{} -{}-> {}",
                vertex_label(from),
                e.weight().display(),
                vertex_label(to)
            )
        });

        Ok(isolated.chain(edges).collect())
    }

    /// Writes [`dump`](Self::dump) to `out`, one line each.
    ///
    /// # Errors
    /// [`DagError::EmptyGraph`] if the graph has no vertices, or
    /// [`DagError::Write`] if `out` fails.
    pub fn show<O: io::Write>(&self, out: &mut O) -> DagResult<()> {
        for line in self.dump()? {
            writeln!(out, "{line}").map_err(|e| DagError::write(&e))?;
        }
        Ok(())
    }
}

impl<W: Serialize> Dag<W> {
    /// Structured snapshot of the vertices and edges for tooling.
    ///
    /// ```
    /// use wdag::Dag;
    ///
    /// let mut dag = Dag::new();
    /// let a = dag.add_vertex(2);
    /// let b = dag.add_vertex(3);
    /// dag.add_edge(a, b, 4).unwrap();
    ///
    /// let snap = dag.snapshot();
    /// assert_eq!(snap["vertices"][1]["weight"], 3);
    /// assert_eq!(snap["edges"][0]["to"], 1);
    /// ```
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "vertices": self.vertices(),
            "edges": self.edges(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Dag, DagError};
    use crate::weight::ReverseDigit;
    use std::collections::HashSet;
    use std::io;

    #[test]
    fn empty_graph_cannot_be_dumped() {
        let dag: Dag<i32> = Dag::new();
        assert_eq!(dag.dump(), Err(DagError::EmptyGraph));

        let mut out = Vec::new();
        assert_eq!(dag.show(&mut out), Err(DagError::EmptyGraph));
        assert!(out.is_empty());
    }

    #[test]
    fn single_vertex_is_isolated() {
        let mut dag = Dag::new();
        dag.add_vertex(2i32);
        assert_eq!(dag.dump().unwrap(), vec!["(id:0,w:2)".to_string()]);
    }

    #[test]
    fn isolated_vertices_then_edges() {
        let mut dag = Dag::new();
        let v: Vec<_> = (0..4).map(|_| dag.add_vertex(2i32)).collect();
        dag.add_edge(v[0], v[1], 4).unwrap();

        let lines = dag.dump().unwrap();
        assert_eq!(lines.len(), 3);

        let isolated: HashSet<_> = lines[..2].iter().cloned().collect();
        let expected: HashSet<_> = ["(id:2,w:2)", "(id:3,w:2)"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(isolated, expected);
        assert_eq!(lines[2], "(id:0,w:2) -4-> (id:1,w:2)");
    }

    #[test]
    fn show_writes_lines() {
        let mut dag = Dag::new();
        let a = dag.add_vertex(ReverseDigit::from("c"));
        let b = dag.add_vertex(ReverseDigit::from("c"));
        dag.add_edge(a, b, ReverseDigit::from("d")).unwrap();

        let mut out = Vec::new();
        dag.show(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(id:0,w:c) -d-> (id:1,w:c)\n");
    }

    /// Sink that refuses every write.
    struct FullDisk {
        attempts: usize,
    }

    impl io::Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn show_reports_failing_sink() {
        let mut dag = Dag::new();
        dag.add_vertex(2i32);

        let mut sink = FullDisk { attempts: 0 };
        let err = dag.show(&mut sink).unwrap_err();
        assert!(matches!(err, DagError::Write { .. }));
        assert_eq!(
            err,
            DagError::Write {
                reason: "disk full".to_string()
            }
        );
        assert!(!err.is_cycle());
    }

    #[test]
    fn show_on_empty_graph_fails_before_writing() {
        let dag: Dag<i32> = Dag::new();
        let mut sink = FullDisk { attempts: 0 };

        assert_eq!(dag.show(&mut sink), Err(DagError::EmptyGraph));
        assert_eq!(sink.attempts, 0);
    }
}
