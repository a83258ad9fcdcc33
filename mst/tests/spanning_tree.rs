//! End-to-end spanning-tree tests.
//!
//! Random graphs come from a seeded `StdRng`; small ones are checked against a
//! brute-force minimum over every (n - 1)-edge subset.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spangraph_mst::prelude::*;
use spangraph_mst::UnionFind;

/// Undirected edge as (a, b, cost) over node indices.
type Link = (usize, usize, f64);

fn name(i: usize) -> String {
    format!("N{}", i)
}

/// Connected random graph: a random spanning chain plus extra links.
/// Costs are whole numbers so sums compare exactly.
fn random_links(rng: &mut StdRng, nodes: usize, extra: usize) -> Vec<Link> {
    let mut links = Vec::new();
    for i in 1..nodes {
        let j = rng.gen_range(0..i);
        links.push((j, i, rng.gen_range(0..20) as f64));
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..nodes);
        let b = rng.gen_range(0..nodes);
        if a != b {
            links.push((a, b, rng.gen_range(0..20) as f64));
        }
    }
    links
}

/// Store every link in both directions.
fn symmetric_graph(nodes: usize, links: &[Link]) -> GraphStore<usize> {
    let mut graph = GraphStore::new();
    for i in 0..nodes {
        graph.add_node_with_info(name(i), i).unwrap();
    }
    for &(a, b, cost) in links {
        graph.add_edge(&name(a), &name(b), cost).unwrap();
        graph.add_edge(&name(b), &name(a), cost).unwrap();
    }
    graph
}

/// Minimum total cost over every spanning subset of `links`.
fn brute_force_weight(nodes: usize, links: &[Link]) -> f64 {
    let mut best = f64::INFINITY;
    for mask in 0u32..(1u32 << links.len()) {
        if mask.count_ones() as usize != nodes - 1 {
            continue;
        }
        let mut sets = UnionFind::new(nodes);
        let mut cost = 0.0;
        for (i, &(a, b, c)) in links.iter().enumerate() {
            if mask & (1 << i) != 0 {
                sets.union(a, b);
                cost += c;
            }
        }
        if sets.set_count() == 1 && cost < best {
            best = cost;
        }
    }
    best
}

/// True if no edge of `tree` closes a cycle (direction ignored).
fn is_forest<T>(tree: &GraphStore<T>) -> bool {
    let slots: Vec<NodeId> = tree.nodes().map(|n| n.id).collect();
    let slot = |id: NodeId| slots.iter().position(|s| *s == id);
    let mut sets = UnionFind::new(slots.len());
    tree.edges().all(|e| match (slot(e.from), slot(e.to)) {
        (Some(a), Some(b)) => sets.union(a, b),
        _ => false,
    })
}

fn triangle() -> GraphStore<()> {
    let mut graph = GraphStore::new();
    for n in ["A", "B", "C"] {
        graph.add_node(n).unwrap();
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 2.0).unwrap();
    graph.add_edge("A", "C", 5.0).unwrap();
    graph
}

#[test]
fn test_triangle_example() {
    let graph = triangle();

    let kruskal = graph.kruskal("A").unwrap();
    let prim = graph.prim("A").unwrap();

    assert!(kruskal.is_valid_path(&["A", "B", "C"]));
    assert!(!kruskal.is_valid_path(&["A", "C"]));
    assert_eq!(kruskal.edge_count(), 2);
    assert_eq!(kruskal.total_cost(), 3.0);
    assert_eq!(prim.total_cost(), 3.0);

    // Source graph is untouched
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.is_valid_path(&["A", "C"]));
}

#[test]
fn test_builders_match_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..40 {
        let nodes = rng.gen_range(2..=6);
        let links = random_links(&mut rng, nodes, 6);
        let graph = symmetric_graph(nodes, &links);
        let expected = brute_force_weight(nodes, &links);

        let start = name(rng.gen_range(0..nodes));
        let prim = graph.prim(&start).unwrap();
        let kruskal = graph.kruskal(&start).unwrap();

        assert_eq!(prim.total_cost(), expected, "prim, round {}", round);
        assert_eq!(kruskal.total_cost(), expected, "kruskal, round {}", round);
    }
}

#[test]
fn test_connected_graph_yields_spanning_tree() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let nodes = rng.gen_range(1..=30);
        let links = random_links(&mut rng, nodes, 40);
        let graph = symmetric_graph(nodes, &links);

        for tree in [
            graph.prim_with_rng(&mut rng).unwrap(),
            graph.kruskal_with_rng(&mut rng).unwrap(),
        ] {
            assert_eq!(tree.node_count(), nodes);
            assert_eq!(tree.edge_count(), nodes - 1);
            assert!(is_forest(&tree));
            for node in tree.nodes() {
                assert_eq!(node.info, graph.node(&node.name).and_then(|n| n.info));
            }
        }
    }
}

#[test]
fn test_kruskal_never_closes_a_cycle_on_directed_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let nodes = rng.gen_range(2..=15);
        let mut graph: GraphStore<()> = GraphStore::new();
        for i in 0..nodes {
            graph.add_node(name(i)).unwrap();
        }
        for _ in 0..rng.gen_range(0..30) {
            let a = rng.gen_range(0..nodes);
            let b = rng.gen_range(0..nodes);
            graph
                .add_edge(&name(a), &name(b), rng.gen_range(0.0..10.0))
                .unwrap();
        }

        let tree = graph.kruskal(&name(0)).unwrap();

        assert_eq!(tree.node_count(), nodes);
        assert!(tree.edge_count() < nodes);
        assert!(is_forest(&tree));
    }
}

#[test]
fn test_prim_terminates_on_disconnected_graph() {
    let links = vec![(0, 1, 1.0), (2, 3, 1.0)];
    let graph = symmetric_graph(4, &links);

    let result = graph.prim("N0");

    assert_eq!(
        result.map(|t| t.node_count()),
        Err(GraphError::DisconnectedGraph {
            reached: 2,
            total: 4,
            unreachable: vec!["N2".to_string(), "N3".to_string()],
        })
    );

    // Kruskal still returns a forest
    let forest = graph.kruskal("N0").unwrap();
    assert_eq!(forest.edge_count(), 2);
}

#[test]
fn test_prim_follows_edge_direction() {
    // B is only reachable by an edge pointing into A
    let mut graph: GraphStore<()> = GraphStore::new();
    graph.add_node("A").unwrap();
    graph.add_node("B").unwrap();
    graph.add_edge("B", "A", 1.0).unwrap();

    assert!(matches!(
        graph.prim("A"),
        Err(GraphError::DisconnectedGraph { .. })
    ));
    assert_eq!(graph.prim("B").map(|t| t.edge_count()), Ok(1));
}

#[test]
fn test_builder_after_mutation() {
    let mut graph = triangle();
    graph.remove_node("B");

    let mut builder = SpanningTreeBuilder::new(MstConfig::kruskal().with_start("A"));
    let tree = builder.build(&graph).unwrap();

    assert_eq!(tree.node_count(), 2);
    assert!(tree.is_valid_path(&["A", "C"]));
    assert_eq!(tree.total_cost(), 5.0);
}

#[test]
fn test_random_start_wrappers() {
    let graph = triangle();

    // Only A reaches every node, so Prim from a random start may fail;
    // Kruskal never depends on the start.
    assert_eq!(graph.kruskal_random().map(|t| t.total_cost()), Ok(3.0));
    match graph.prim_random() {
        Ok(tree) => assert_eq!(tree.total_cost(), 3.0),
        Err(err) => assert!(matches!(err, GraphError::DisconnectedGraph { .. })),
    }

    let empty: GraphStore<()> = GraphStore::new();
    assert_eq!(
        empty.prim_random().map(|t| t.node_count()),
        Err(GraphError::EmptyGraph)
    );
}
