//! Shared helpers for the spanning-tree builders.

use spangraph_core::{GraphError, GraphResult, Node, NodeId};
use spangraph_graph::GraphStore;

/// Copy `node`'s name and payload (not its edges) into `tree`.
pub(crate) fn copy_node<T: Clone>(tree: &mut GraphStore<T>, node: &Node<T>) -> GraphResult<NodeId> {
    match &node.info {
        Some(info) => tree.add_node_with_info(node.name.clone(), info.clone()),
        None => tree.add_node(node.name.clone()),
    }
}

/// Name of `id` in `graph`, or `NodeNotFound` carrying the raw id.
pub(crate) fn name_of<T>(graph: &GraphStore<T>, id: NodeId) -> GraphResult<&str> {
    graph
        .name_of(id)
        .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
}
