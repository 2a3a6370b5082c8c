#![deny(missing_docs)]

//! Topology classification for seller competition networks.
//!
//! Closed-form equilibria are only known for a few network shapes, so a
//! network is first labelled as a path, a binary tree, a star, or none of
//! these. Hypergraphs are never recognised.

mod class;
mod classify;
mod pruning;
pub mod sketch;

pub use class::TopologyClass;
pub use classify::{
    classify, is_binary_tree, is_path, is_star, Classify, HypergraphCheck,
    MAX_BINARY_TREE_DEGREE,
};
pub use pruning::{prune_leaves, PruneOutcome};
pub use sketch::EquilibriumSketch;
