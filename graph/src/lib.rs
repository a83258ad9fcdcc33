//! Spangraph Graph Storage
//!
//! This crate provides the in-memory weighted graph store:
//! - Named nodes with an optional typed payload
//! - Directed, weighted edges owned by their source node
//! - Name index: Find nodes by name
//! - Inbound index: Find the nodes pointing at a node

mod graph;
mod index;

pub use graph::*;
