//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Uses union-find with path compression and union by rank.

use std::collections::HashMap;

use spangraph_core::{Edge, GraphError, GraphResult, NodeId};
use spangraph_graph::GraphStore;
use tracing::{debug, trace};

use crate::helpers::{copy_node, name_of};
use crate::union_find::UnionFind;

/// Kruskal's minimum spanning tree (a spanning forest if `graph` is disconnected).
///
/// `start` must name an existing node but does not influence the result:
/// every node is copied into the tree, then edges are taken cheapest first
/// (ties in encounter order) whenever they join two different components.
/// Edge direction is kept as in the source graph.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal_mst<T: Clone>(graph: &GraphStore<T>, start: &str) -> GraphResult<GraphStore<T>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(GraphError::NodeNotFound(start.to_string()));
    }

    let total = graph.node_count();
    debug!(start, nodes = total, "Building Kruskal spanning tree");

    // Every node gets a dense slot for the union-find
    let mut tree = GraphStore::new();
    let mut slots: HashMap<NodeId, usize> = HashMap::with_capacity(total);
    for (slot, node) in graph.nodes().enumerate() {
        copy_node(&mut tree, node)?;
        slots.insert(node.id, slot);
    }

    // Stable sort keeps encounter order among equal costs
    let mut edges: Vec<&Edge> = graph.edges().collect();
    edges.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    let mut components = UnionFind::new(total);
    let wanted = total - 1;
    let mut accepted = 0;

    for edge in edges {
        if accepted == wanted {
            break;
        }
        let (Some(&a), Some(&b)) = (slots.get(&edge.from), slots.get(&edge.to)) else {
            continue;
        };

        let from = name_of(graph, edge.from)?;
        let to = name_of(graph, edge.to)?;
        if !components.union(a, b) {
            trace!(from, to, cost = edge.cost, "Kruskal rejected edge: would close a cycle");
            continue;
        }

        tree.add_edge(from, to, edge.cost)?;
        accepted += 1;
        trace!(from, to, cost = edge.cost, "Kruskal accepted edge");
    }

    debug!(
        start,
        edges = accepted,
        components = components.set_count(),
        total_cost = tree.total_cost(),
        "Kruskal spanning tree complete"
    );
    Ok(tree)
}
