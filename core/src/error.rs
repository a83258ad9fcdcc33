//! Common error types for spangraph.

use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A referenced node name does not exist in the store.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// A node with this name already exists.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Edge cost is negative, NaN or infinite.
    #[error("Invalid cost {cost} on edge {from} -> {to}")]
    InvalidCost { from: String, to: String, cost: f64 },

    /// Both nodes exist but no outgoing edge links them.
    #[error("No edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    /// Prim could not reach every node from the start node.
    #[error("Disconnected graph: reached {reached} of {total} nodes, unreachable: {}", .unreachable.join(", "))]
    DisconnectedGraph {
        reached: usize,
        total: usize,
        unreachable: Vec<String>,
    },

    /// The source graph has no nodes.
    #[error("Graph is empty")]
    EmptyGraph,
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
