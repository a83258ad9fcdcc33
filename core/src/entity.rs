//! Entity structures for spangraph.
//!
//! Nodes own their outgoing edges; edges only name their endpoints.

use crate::NodeId;

/// A directed, weighted edge between two nodes of the same store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source node.
    pub from: NodeId,
    /// Target node.
    pub to: NodeId,
    /// Non-negative weight.
    pub cost: f64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: NodeId, to: NodeId, cost: f64) -> Self {
        Self { from, to, cost }
    }

    /// Returns true if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// A named node carrying an optional caller payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// Identity within the owning store.
    pub id: NodeId,
    /// Unique name within the owning store.
    pub name: String,
    /// Caller-defined payload.
    pub info: Option<T>,
    /// Outgoing edges in insertion order.
    pub out_edges: Vec<Edge>,
}

impl<T> Node<T> {
    /// Create a node without edges.
    pub fn new(id: NodeId, name: impl Into<String>, info: Option<T>) -> Self {
        Self {
            id,
            name: name.into(),
            info,
            out_edges: Vec::new(),
        }
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.out_edges.len()
    }

    /// First outgoing edge to `to`, in insertion order.
    pub fn edge_to(&self, to: NodeId) -> Option<&Edge> {
        self.out_edges.iter().find(|e| e.to == to)
    }

    /// Drop every outgoing edge that targets `to`; returns how many were removed.
    pub fn remove_edges_to(&mut self, to: NodeId) -> usize {
        let before = self.out_edges.len();
        self.out_edges.retain(|e| e.to != to);
        before - self.out_edges.len()
    }
}
