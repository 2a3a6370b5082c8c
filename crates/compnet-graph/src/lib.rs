#![deny(missing_docs)]

//! Incidence store for seller competition networks.
//!
//! Sellers are vertices and every group is a hyperedge whose weight is the
//! competitive intensity among its members. The store only grows: groups are
//! created atomically and never edited.

mod flags;
mod generators;
mod incidence;
mod render;

pub use flags::NetworkConfig;
pub use generators::{gen_bounded_tree, gen_cycle, gen_path, gen_star};
pub use incidence::{CompetitionNetwork, IncidenceStore};
