use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;
use wdag::{CycleCheck, Dag, DagConfig, DagError, VertexId};

fn dag_with(check: CycleCheck, vertices: usize) -> Dag<i32> {
    let mut dag = Dag::with_config(DagConfig::default().with_cycle_check(check));
    for w in 0..vertices {
        dag.add_vertex(i32::try_from(w).unwrap());
    }
    dag
}

/// Mirrors `dag`'s committed edges plus `candidate` into petgraph.
fn reference_is_cyclic(dag: &Dag<i32>, candidate: (usize, usize)) -> bool {
    let mut g = DiGraph::<(), ()>::new();
    let nodes: Vec<NodeIndex> = (0..dag.vertex_count()).map(|_| g.add_node(())).collect();
    for e in dag.edges() {
        g.add_edge(nodes[e.from().index()], nodes[e.to().index()], ());
    }
    g.add_edge(nodes[candidate.0], nodes[candidate.1], ());
    is_cyclic_directed(&g)
}

fn assert_valid_order(dag: &Dag<i32>) {
    let order = dag.topological_sort().expect("graph built through add_edge is acyclic");
    assert_eq!(order.len(), dag.vertex_count());

    let mut pos = vec![usize::MAX; dag.vertex_count()];
    for (i, id) in order.iter().enumerate() {
        assert_eq!(pos[id.index()], usize::MAX, "vertex {} emitted twice", id);
        pos[id.index()] = i;
    }
    for e in dag.edges() {
        assert!(
            pos[e.from().index()] < pos[e.to().index()],
            "edge {:?} out of order",
            e.endpoints()
        );
    }
}

proptest! {
    #[test]
    fn insertion_keeps_graph_acyclic(
        vertices in 1usize..12,
        ops in proptest::collection::vec((0usize..64, 0usize..64, -5i32..20), 0..60),
    ) {
        let mut shadow = dag_with(CycleCheck::ShadowSort, vertices);
        let mut reach = dag_with(CycleCheck::Reachability, vertices);

        for (a, b, w) in ops {
            let (a, b) = (a % vertices, b % vertices);
            let expected_cycle = reference_is_cyclic(&shadow, (a, b));
            let edges_before = shadow.edge_count();

            let res_shadow = shadow.add_edge(VertexId::new(a), VertexId::new(b), w);
            let res_reach = reach.add_edge(VertexId::new(a), VertexId::new(b), w);
            prop_assert_eq!(&res_shadow, &res_reach);

            if expected_cycle {
                prop_assert_eq!(
                    res_shadow,
                    Err(DagError::CycleRejected { from: VertexId::new(a), to: VertexId::new(b) })
                );
                prop_assert_eq!(shadow.edge_count(), edges_before);
            } else {
                prop_assert!(res_shadow.is_ok());
                prop_assert_eq!(shadow.edge_count(), edges_before + 1);
            }
        }

        prop_assert_eq!(shadow.vertex_count(), vertices);
        prop_assert!(shadow.validate_invariants());
        assert_valid_order(&shadow);
        prop_assert_eq!(shadow.topological_sort().unwrap(), reach.topological_sort().unwrap());
    }

    #[test]
    fn unknown_ids_never_mutate(
        vertices in 0usize..6,
        a in 0usize..10,
        b in 0usize..10,
    ) {
        prop_assume!(a >= vertices || b >= vertices);
        let mut dag = dag_with(CycleCheck::ShadowSort, vertices);

        let res = dag.add_edge(VertexId::new(a), VertexId::new(b), 1);
        prop_assert!(matches!(res, Err(DagError::UnknownVertex { .. })), "expected UnknownVertex, got {:?}", res);
        prop_assert_eq!(dag.edge_count(), 0);
        prop_assert_eq!(dag.vertex_count(), vertices);
    }

    #[test]
    fn longest_path_from_self_is_zero(
        vertices in 1usize..10,
        ops in proptest::collection::vec((0usize..32, 0usize..32), 0..30),
        probe in 0usize..32,
    ) {
        let mut dag = dag_with(CycleCheck::ShadowSort, vertices);
        for (a, b) in ops {
            let _ = dag.add_edge(VertexId::new(a % vertices), VertexId::new(b % vertices), 3);
        }

        let x = VertexId::new(probe % vertices);
        prop_assert_eq!(dag.longest_path(x, x).unwrap(), "0");
    }
}
