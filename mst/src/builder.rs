//! Config-driven entry point for spanning-tree construction.

use rand::rngs::StdRng;
use rand::SeedableRng;
use spangraph_core::GraphResult;
use spangraph_graph::GraphStore;
use tracing::debug;

use crate::config::{Algorithm, MstConfig};
use crate::kruskal::kruskal_mst;
use crate::prim::prim_mst;
use crate::start::random_start;

/// Builds spanning trees according to an [`MstConfig`].
///
/// Owns a `StdRng` seeded from the config, so repeated builds draw a fresh
/// start each time while staying reproducible across runs.
pub struct SpanningTreeBuilder {
    pub config: MstConfig,
    pub rng: StdRng,
}

impl SpanningTreeBuilder {
    pub fn new(config: MstConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// Build a spanning tree of `graph`.
    pub fn build<T: Clone>(&mut self, graph: &GraphStore<T>) -> GraphResult<GraphStore<T>> {
        let start = match &self.config.start {
            Some(start) => start.clone(),
            None => random_start(graph, &mut self.rng)?.to_string(),
        };

        debug!(algorithm = %self.config.algorithm, start = %start, "Building spanning tree");

        match self.config.algorithm {
            Algorithm::Prim => prim_mst(graph, &start),
            Algorithm::Kruskal => kruskal_mst(graph, &start),
        }
    }
}
