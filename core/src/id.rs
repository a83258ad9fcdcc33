//! Identity type for graph nodes.
//!
//! Node identifiers are 64-bit values that are:
//! - Unique within the store that allocated them
//! - Allocated in increasing order, so they sort by insertion
//! - Never reused after the node is removed

use std::fmt;

/// Unique identifier for a node within one graph store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
