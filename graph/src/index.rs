//! Indexes for efficient graph lookups.

use spangraph_core::NodeId;
use std::collections::HashMap;

/// Name index: name -> NodeId
#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    index: HashMap<String, NodeId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name. Returns false (and leaves the index unchanged) if the
    /// name is already taken.
    pub fn insert(&mut self, name: &str, node_id: NodeId) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), node_id);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<NodeId> {
        self.index.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

/// Inbound index: target NodeId -> { source NodeId -> number of parallel edges }
#[derive(Debug, Default, Clone)]
pub struct InboundIndex {
    inbound: HashMap<NodeId, HashMap<NodeId, usize>>,
}

impl InboundIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: NodeId, to: NodeId) {
        *self.inbound.entry(to).or_default().entry(from).or_default() += 1;
    }

    /// Drop every entry that mentions `node_id`, as source or target.
    pub fn forget(&mut self, node_id: NodeId) {
        self.inbound.remove(&node_id);
        self.inbound.retain(|_, sources| {
            sources.remove(&node_id);
            !sources.is_empty()
        });
    }

    /// Nodes with at least one edge into `node_id`.
    pub fn sources_of(&self, node_id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.inbound
            .get(&node_id)
            .into_iter()
            .flat_map(|sources| sources.keys().copied())
    }
}
