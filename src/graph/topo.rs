//! Kahn's algorithm and reachability over raw edge endpoints.
//!
//! Both functions work on vertex indices `0..vertex_count` and an arbitrary
//! edge sequence, so the store can ask about a candidate edge set that
//! includes an uncommitted edge without copying or mutating itself.

use super::error::{DagError, DagResult};
use super::vertex::VertexId;
use tracing::{debug, trace};

/// Computes a topological ordering of `0..vertex_count` under `edges`.
///
/// Works in rounds: every vertex that is ready at the start of a round is
/// emitted (ascending id), and the vertices it frees form the next round.
/// Parallel edges count once per edge toward a vertex's in-degree.
///
/// Every endpoint must be below `vertex_count`.
///
/// # Errors
/// [`DagError::CycleDetected`] if some vertices never become ready.
pub(crate) fn kahn_order<I>(vertex_count: usize, edges: I) -> DagResult<Vec<VertexId>>
where
    I: IntoIterator<Item = (VertexId, VertexId)>,
{
    let n = vertex_count;
    let mut indeg = vec![0usize; n];
    let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (from, to) in edges {
        successors[from.index()].push(to.index());
        indeg[to.index()] += 1;
    }

    // Sources in increasing order for determinism.
    let mut ready: Vec<usize> = (0..n).filter(|&u| indeg[u] == 0).collect();
    let mut order = Vec::with_capacity(n);
    let mut round = 0usize;

    while !ready.is_empty() {
        trace!(round, ready = ready.len(), "kahn round");
        let mut next = Vec::new();
        for &u in &ready {
            order.push(VertexId::new(u));
            for &v in &successors[u] {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    next.push(v);
                }
            }
        }
        next.sort_unstable();
        ready = next;
        round += 1;
    }

    if order.len() == n {
        debug!(vertices = n, rounds = round, "topological order computed");
        Ok(order)
    } else {
        let remaining = n - order.len();
        debug!(vertices = n, remaining, "cycle detected");
        Err(DagError::cycle_detected(remaining))
    }
}

/// Returns `true` if `target` is reachable from `start` (a vertex reaches itself).
///
/// `successors` yields the direct successors of a vertex; every yielded index
/// must be below `vertex_count`.
pub(crate) fn reaches<F, I>(
    vertex_count: usize,
    start: VertexId,
    target: VertexId,
    mut successors: F,
) -> bool
where
    F: FnMut(VertexId) -> I,
    I: IntoIterator<Item = VertexId>,
{
    if start == target {
        return true;
    }

    let mut visited = vec![false; vertex_count]; // Much faster than HashSet for small n
    let mut stack = vec![start];
    visited[start.index()] = true;

    while let Some(u) = stack.pop() {
        for v in successors(u) {
            if v == target {
                return true;
            }
            if !visited[v.index()] {
                visited[v.index()] = true;
                stack.push(v);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(pairs: &[(usize, usize)]) -> Vec<(VertexId, VertexId)> {
        pairs
            .iter()
            .map(|&(a, b)| (VertexId::new(a), VertexId::new(b)))
            .collect()
    }

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    #[test]
    fn empty_graph_has_empty_order() {
        assert_eq!(kahn_order(0, Vec::new()).unwrap(), Vec::<VertexId>::new());
    }

    #[test]
    fn rounds_emit_in_ascending_id() {
        // 0 -> 1, 1 -> 2, 3 -> 2, 0 -> 2, 2 -> 4; 5 isolated
        let e = edges(&[(0, 1), (1, 2), (3, 2), (0, 2), (2, 4)]);
        let order = kahn_order(6, e).unwrap();
        assert_eq!(order, ids(&[0, 3, 5, 1, 2, 4]));
    }

    #[test]
    fn diamond_order_respects_edges() {
        let e = edges(&[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = kahn_order(4, e.clone()).unwrap();

        let pos = |v: VertexId| order.iter().position(|&x| x == v).unwrap();
        for (a, b) in e {
            assert!(pos(a) < pos(b));
        }
        assert_eq!(order[0], VertexId::new(0));
        assert_eq!(order[3], VertexId::new(3));
    }

    #[test]
    fn cycle_reports_remaining_vertices() {
        // 0 -> 1 -> 2 -> 0, plus a free vertex 3
        let e = edges(&[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(kahn_order(4, e), Err(DagError::cycle_detected(3)));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let e = edges(&[(0, 0)]);
        assert_eq!(kahn_order(1, e), Err(DagError::cycle_detected(1)));
    }

    #[test]
    fn parallel_edges_drain_together() {
        let e = edges(&[(0, 1), (0, 1)]);
        assert_eq!(kahn_order(2, e).unwrap(), ids(&[0, 1]));
    }

    #[test]
    fn reachability() {
        let adj = vec![vec![1usize], vec![2], vec![], vec![0]];
        let succ = |u: VertexId| {
            adj[u.index()]
                .iter()
                .copied()
                .map(VertexId::new)
                .collect::<Vec<_>>()
        };

        assert!(reaches(4, VertexId::new(3), VertexId::new(2), succ));
        assert!(!reaches(4, VertexId::new(2), VertexId::new(0), succ));
        assert!(reaches(4, VertexId::new(1), VertexId::new(1), succ));
    }
}
