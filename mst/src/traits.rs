//! Spanning-tree methods on the graph store itself.

use rand::Rng;
use spangraph_core::GraphResult;
use spangraph_graph::GraphStore;

use crate::kruskal::kruskal_mst;
use crate::prim::prim_mst;
use crate::start::random_start;

/// Minimum spanning tree algorithms.
///
/// Every method leaves `self` untouched and returns a new graph.
pub trait MinimumSpanningTree: Sized {
    /// Prim's algorithm grown from `start`.
    fn prim(&self, start: &str) -> GraphResult<Self>;

    /// Kruskal's algorithm; `start` must exist but does not affect the tree.
    fn kruskal(&self, start: &str) -> GraphResult<Self>;

    /// Prim's algorithm from a start drawn from `rng`.
    fn prim_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<Self>;

    /// Kruskal's algorithm with a start drawn from `rng`.
    fn kruskal_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<Self>;

    /// Prim's algorithm from a start drawn from the thread RNG.
    fn prim_random(&self) -> GraphResult<Self> {
        self.prim_with_rng(&mut rand::thread_rng())
    }

    /// Kruskal's algorithm with a start drawn from the thread RNG.
    fn kruskal_random(&self) -> GraphResult<Self> {
        self.kruskal_with_rng(&mut rand::thread_rng())
    }
}

impl<T: Clone> MinimumSpanningTree for GraphStore<T> {
    fn prim(&self, start: &str) -> GraphResult<Self> {
        prim_mst(self, start)
    }

    fn kruskal(&self, start: &str) -> GraphResult<Self> {
        kruskal_mst(self, start)
    }

    fn prim_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<Self> {
        let start = random_start(self, rng)?;
        prim_mst(self, start)
    }

    fn kruskal_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<Self> {
        let start = random_start(self, rng)?;
        kruskal_mst(self, start)
    }
}
