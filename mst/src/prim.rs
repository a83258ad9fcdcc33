//! Minimum spanning tree via Prim's algorithm.
//!
//! The tree grows from the start node along outgoing edges; a binary heap
//! holds every edge leaving the tree, cheapest first.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use spangraph_core::{GraphError, GraphResult, Node, NodeId};
use spangraph_graph::GraphStore;
use tracing::{debug, trace};

use crate::helpers::copy_node;

/// An edge leaving the tree. `seq` records discovery order so the first-seen
/// candidate wins among equal costs.
#[derive(Debug)]
struct Candidate {
    cost: f64,
    seq: u64,
    from: NodeId,
    to: NodeId,
}

impl Ord for Candidate {
    // Reversed: BinaryHeap is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Crossing-edge frontier plus the traversal-local visited set.
struct Frontier {
    heap: BinaryHeap<Candidate>,
    visited: HashSet<NodeId>,
    next_seq: u64,
}

impl Frontier {
    fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            visited: HashSet::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Mark `node` as part of the tree and enqueue its edges to outside nodes.
    fn absorb<T>(&mut self, node: &Node<T>) {
        self.visited.insert(node.id);
        for edge in &node.out_edges {
            if self.visited.contains(&edge.to) {
                continue;
            }
            self.heap.push(Candidate {
                cost: edge.cost,
                seq: self.next_seq,
                from: edge.from,
                to: edge.to,
            });
            self.next_seq += 1;
        }
    }

    /// Cheapest candidate whose target is still outside the tree.
    fn pop(&mut self) -> Option<Candidate> {
        while let Some(candidate) = self.heap.pop() {
            if !self.visited.contains(&candidate.to) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Prim's minimum spanning tree rooted at `start`.
///
/// Tree edges point away from the root. Every node of `graph` must be
/// reachable from `start` along outgoing edges; otherwise the growth stops
/// once the frontier is exhausted and [`GraphError::DisconnectedGraph`] names
/// the nodes that were never reached.
///
/// Time: O(E log E).
pub fn prim_mst<T: Clone>(graph: &GraphStore<T>, start: &str) -> GraphResult<GraphStore<T>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let root = graph
        .node(start)
        .ok_or_else(|| GraphError::NodeNotFound(start.to_string()))?;

    let total = graph.node_count();
    debug!(start, nodes = total, "Building Prim spanning tree");

    let mut tree = GraphStore::new();
    let mut frontier = Frontier::new(total);
    copy_node(&mut tree, root)?;
    frontier.absorb(root);

    while tree.node_count() < total {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        let (Some(from), Some(to)) = (
            graph.node_by_id(candidate.from),
            graph.node_by_id(candidate.to),
        ) else {
            continue;
        };

        copy_node(&mut tree, to)?;
        tree.add_edge(&from.name, &to.name, candidate.cost)?;
        trace!(from = %from.name, to = %to.name, cost = candidate.cost, "Prim accepted edge");
        frontier.absorb(to);
    }

    if tree.node_count() < total {
        let unreachable: Vec<String> = graph
            .nodes()
            .filter(|n| !frontier.visited.contains(&n.id))
            .map(|n| n.name.clone())
            .collect();
        debug!(
            start,
            reached = tree.node_count(),
            unreachable = unreachable.len(),
            "Prim frontier exhausted"
        );
        return Err(GraphError::DisconnectedGraph {
            reached: tree.node_count(),
            total,
            unreachable,
        });
    }

    debug!(
        start,
        edges = tree.edge_count(),
        total_cost = tree.total_cost(),
        "Prim spanning tree complete"
    );
    Ok(tree)
}
