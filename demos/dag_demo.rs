//! Walk-through of building, validating and querying two weighted DAGs.
//!
//! Run with `RUST_LOG=wdag=debug` to see every mutation and rejection.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use wdag::{Dag, ReverseDigit, VertexId, Weight};

fn show<W: Weight>(dag: &Dag<W>) {
    if let Err(err) = dag.show(&mut std::io::stdout()) {
        println!("{err}");
    }
}

fn connect<W: Weight>(dag: &mut Dag<W>, from: VertexId, to: VertexId, weight: W) {
    if let Err(err) = dag.add_edge(from, to, weight) {
        println!("{err}");
    }
}

fn report<W: Weight>(dag: &Dag<W>, from: VertexId, to: VertexId) -> Result<()> {
    let order = dag.topological_sort()?;
    let order: Vec<String> = order.iter().map(ToString::to_string).collect();
    println!("A topological ordering of the dag: [{}]", order.join(" "));

    let longest = dag.longest_path(from, to)?;
    println!("Weight of the longest path between vertex {from} and {to} = {longest}");
    Ok(())
}

fn integer_dag() -> Result<()> {
    println!("Creating DAG");
    let mut dag = Dag::new();

    println!("Trying to show empty dag:");
    show(&dag);

    println!("Adding vertices with weight 2 and the following ids:");
    let v: Vec<VertexId> = (0..6).map(|_| dag.add_vertex(2i64)).collect();
    let ids: Vec<String> = v.iter().map(ToString::to_string).collect();
    println!("{}", ids.join(" "));

    println!("Showing dag with only unconnected vertices:");
    show(&dag);

    println!("Adding the following edges (all with weight 4):");
    for (a, b) in [(0, 1), (1, 2), (3, 2), (0, 2), (2, 4)] {
        println!("{} -> {}", v[a], v[b]);
        connect(&mut dag, v[a], v[b], 4);
    }

    println!("Showing dag with some connected vertices:");
    show(&dag);

    println!("Trying to add edge from nonexisting vertex");
    connect(&mut dag, VertexId::new(500), v[5], 5);

    println!("Trying to add edge to nonexisting vertex");
    connect(&mut dag, v[5], VertexId::new(500), 5);

    println!("Trying to add edge from {} to {}, creating a cycle", v[4], v[1]);
    connect(&mut dag, v[4], v[1], 5);

    report(&dag, v[0], v[4])
}

fn textual_dag() -> Result<()> {
    println!();
    println!("Creating a new DAG with char weights ordered by reversed digit codes");
    let mut dag = Dag::new();

    println!("Adding vertices with weight \"c\" and the following ids:");
    let v: Vec<VertexId> = (0..6).map(|_| dag.add_vertex(ReverseDigit::from("c"))).collect();
    let ids: Vec<String> = v.iter().map(ToString::to_string).collect();
    println!("{}", ids.join(" "));

    println!("Adding the following edges with different char weights:");
    let edges = [
        (0, 1, "c"),
        (0, 2, "c"),
        (1, 3, "a"),
        (2, 3, "b"),
        (2, 4, "a"),
        (3, 5, "d"),
        (4, 5, "a"),
    ];
    for (a, b, w) in edges {
        println!("{} -> {} ({w})", v[a], v[b]);
        connect(&mut dag, v[a], v[b], ReverseDigit::from(w));
    }

    println!("Showing dag:");
    show(&dag);

    report(&dag, v[0], v[5])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    integer_dag()?;
    textual_dag()
}
