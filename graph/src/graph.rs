//! Core graph storage implementation.

use crate::index::{InboundIndex, NameIndex};
use spangraph_core::{Edge, GraphError, GraphResult, Node, NodeId};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// ID allocator for nodes.
#[derive(Debug, Clone)]
struct IdAllocator {
    next_node_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_node_id: 1 }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }
}

/// The in-memory weighted graph storage.
///
/// Nodes are keyed by a monotonically allocated [`NodeId`], so iterating the
/// storage map yields nodes in insertion order.
#[derive(Debug, Clone)]
pub struct GraphStore<T> {
    /// Node storage
    nodes: BTreeMap<NodeId, Node<T>>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Name index
    names: NameIndex,
    /// Inbound edge index
    inbound: InboundIndex,
}

impl<T> Default for GraphStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> GraphStore<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            names: NameIndex::new(),
            inbound: InboundIndex::new(),
        }
    }

    // ==================== Node Operations ====================

    /// Add a node without a payload.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the name is taken.
    pub fn add_node(&mut self, name: impl Into<String>) -> GraphResult<NodeId> {
        self.insert_node(name.into(), None)
    }

    /// Add a node carrying `info`.
    pub fn add_node_with_info(&mut self, name: impl Into<String>, info: T) -> GraphResult<NodeId> {
        self.insert_node(name.into(), Some(info))
    }

    fn insert_node(&mut self, name: String, info: Option<T>) -> GraphResult<NodeId> {
        if self.names.contains(&name) {
            return Err(GraphError::DuplicateNode(name));
        }

        let id = self.id_alloc.alloc_node_id();
        self.names.insert(&name, id);
        self.nodes.insert(id, Node::new(id, name, info));
        Ok(id)
    }

    /// Remove a node, its outgoing edges, and every edge pointing at it.
    ///
    /// Returns the removed node, or `None` if no node has this name.
    pub fn remove_node(&mut self, name: &str) -> Option<Node<T>> {
        let id = self.names.remove(name)?;
        let node = self.nodes.remove(&id)?;

        let sources: Vec<NodeId> = self.inbound.sources_of(id).filter(|s| *s != id).collect();
        let mut dangling = 0;
        for source in sources {
            if let Some(source_node) = self.nodes.get_mut(&source) {
                dangling += source_node.remove_edges_to(id);
            }
        }
        self.inbound.forget(id);

        debug!(
            node = %name,
            own_edges = node.degree(),
            dangling_edges = dangling,
            "Removed node"
        );
        Some(node)
    }

    /// Get a node by name.
    pub fn node(&self, name: &str) -> Option<&Node<T>> {
        self.names.get(name).and_then(|id| self.nodes.get(&id))
    }

    /// Get a node by ID.
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(&id)
    }

    /// Resolve a name to its ID.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name)
    }

    /// Resolve an ID to its name.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.name.as_str())
    }

    /// Returns true if a node has this name.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn require(&self, name: &str) -> GraphResult<NodeId> {
        self.names
            .get(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    // ==================== Edge Operations ====================

    /// Add a directed edge `from -> to`.
    ///
    /// The reverse edge is never created. Self-loops and parallel edges are
    /// accepted. Fails if either endpoint is missing or `cost` is negative or
    /// not finite.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> GraphResult<()> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;

        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost {
                from: from.to_string(),
                to: to.to_string(),
                cost,
            });
        }

        let node = self
            .nodes
            .get_mut(&from_id)
            .ok_or_else(|| GraphError::NodeNotFound(from.to_string()))?;
        node.out_edges.push(Edge::new(from_id, to_id, cost));
        self.inbound.insert(from_id, to_id);

        trace!(from, to, cost, "Added edge");
        Ok(())
    }

    // ==================== Query Operations ====================

    /// Targets of `name`'s outgoing edges, in edge-insertion order.
    ///
    /// A node without edges yields an empty vector; an unknown name is an error.
    pub fn neighbours(&self, name: &str) -> GraphResult<Vec<&Node<T>>> {
        let node = self
            .node(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))?;

        Ok(node
            .out_edges
            .iter()
            .filter_map(|e| self.nodes.get(&e.to))
            .collect())
    }

    /// Returns true if `path` can be walked edge by edge.
    ///
    /// The empty path is valid; a single name is valid iff the node exists.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.validate_path(path).is_ok()
    }

    /// Walk `path` and return the IDs of the nodes passed through.
    ///
    /// Each step follows the first outgoing edge (in insertion order) whose
    /// target has the next name.
    pub fn validate_path<S: AsRef<str>>(&self, path: &[S]) -> GraphResult<Vec<NodeId>> {
        let Some((first, rest)) = path.split_first() else {
            return Ok(Vec::new());
        };

        let first = first.as_ref();
        let mut current = self
            .node(first)
            .ok_or_else(|| GraphError::NodeNotFound(first.to_string()))?;
        let mut walked = vec![current.id];

        for step in rest {
            let step = step.as_ref();
            let next_id = self.require(step)?;
            let edge = current
                .edge_to(next_id)
                .ok_or_else(|| GraphError::MissingEdge {
                    from: current.name.clone(),
                    to: step.to_string(),
                })?;
            current = self
                .nodes
                .get(&edge.to)
                .ok_or_else(|| GraphError::NodeNotFound(step.to_string()))?;
            walked.push(current.id);
        }

        Ok(walked)
    }

    // ==================== Statistics ====================

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.values()
    }

    /// All edges: nodes in insertion order, then each node's edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes.values().flat_map(|n| n.out_edges.iter())
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sum of all edge costs.
    pub fn total_cost(&self) -> f64 {
        self.edges().map(|e| e.cost).sum()
    }
}
