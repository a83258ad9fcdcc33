//! Spangraph Core Types
//!
//! This crate provides the foundational types shared by the graph store and
//! the spanning-tree builders:
//! - Identity type (NodeId)
//! - Entity structures (Node, Edge)
//! - Common error types

mod entity;
mod error;
mod id;

pub use entity::*;
pub use error::*;
pub use id::*;
