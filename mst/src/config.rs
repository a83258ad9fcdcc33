//! Configuration for spanning-tree construction

use std::fmt;

/// Which spanning-tree algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Grow from the start node along outgoing edges
    #[default]
    Prim,
    /// Sort all edges and merge components
    Kruskal,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Prim => write!(f, "prim"),
            Algorithm::Kruskal => write!(f, "kruskal"),
        }
    }
}

/// Configuration for spanning-tree construction
#[derive(Debug, Clone, PartialEq)]
pub struct MstConfig {
    /// Algorithm to run
    pub algorithm: Algorithm,
    /// Fixed start node; drawn from the seeded RNG when `None`
    pub start: Option<String>,
    /// Random seed for reproducible start selection
    pub seed: u64,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Prim,
            start: None,
            seed: 42,
        }
    }
}

impl MstConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prim() -> Self {
        Self::default().with_algorithm(Algorithm::Prim)
    }

    pub fn kruskal() -> Self {
        Self::default().with_algorithm(Algorithm::Kruskal)
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
