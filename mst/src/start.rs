//! Random start-node selection.

use rand::Rng;
use spangraph_core::{GraphError, GraphResult};
use spangraph_graph::GraphStore;

/// Pick a start node uniformly at random.
///
/// The same seeded RNG over the same graph always yields the same name.
pub fn random_start<'g, T, R>(graph: &'g GraphStore<T>, rng: &mut R) -> GraphResult<&'g str>
where
    R: Rng + ?Sized,
{
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let idx = rng.gen_range(0..graph.node_count());
    graph
        .nodes()
        .nth(idx)
        .map(|node| node.name.as_str())
        .ok_or(GraphError::EmptyGraph)
}
