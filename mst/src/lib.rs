//! Spangraph Minimum Spanning Trees
//!
//! This crate builds minimum spanning trees over a [`GraphStore`]:
//! - Prim: grows a tree from a start node along outgoing edges
//! - Kruskal: sorts every edge and merges components with a union-find
//! - Start selection: explicit name, seeded RNG, or thread RNG
//!
//! Builders read the source graph and return a brand-new store.

mod builder;
mod config;
mod helpers;
mod kruskal;
mod prim;
mod start;
mod traits;
mod union_find;

pub use builder::SpanningTreeBuilder;
pub use config::{Algorithm, MstConfig};
pub use kruskal::kruskal_mst;
pub use prim::prim_mst;
pub use start::random_start;
pub use traits::MinimumSpanningTree;
pub use union_find::UnionFind;

pub use spangraph_core::{Edge, GraphError, GraphResult, Node, NodeId};
pub use spangraph_graph::GraphStore;

/// Everything needed to build a graph and ask for its spanning tree.
pub mod prelude {
    pub use crate::{
        kruskal_mst, prim_mst, random_start, Algorithm, Edge, GraphError, GraphResult,
        GraphStore, MinimumSpanningTree, MstConfig, Node, NodeId, SpanningTreeBuilder,
    };
}
