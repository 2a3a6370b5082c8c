#![deny(missing_docs)]
#![doc = "Core identifiers, errors, and structural contracts for seller competition networks."]

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
mod types;

pub use errors::{CompnetError, ErrorInfo};
pub use types::{Seller, Support, Vertex};

/// Identifier for a vertex (seller) within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier for a group (hyperedge) within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(u64);

impl GroupId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One row of the vertex-by-group incidence matrix: group key to group weight.
pub type IncidenceRow = BTreeMap<GroupId, f64>;

/// Read-only structural view over a vertex/group incidence matrix.
///
/// The topology classifier only needs this contract, so any store that can
/// expose its rows can be classified.
pub trait IncidenceStructure {
    /// Number of vertices that appear in at least one group.
    fn vertex_count(&self) -> usize;

    /// Number of distinct groups incident to `vertex`; zero when absent.
    fn degree(&self, vertex: VertexId) -> usize;

    /// Returns `true` when some group is incident to more than two vertices.
    fn is_hypergraph(&self) -> bool;

    /// Number of incidences divided by two.
    ///
    /// Only meaningful once [`is_hypergraph`](Self::is_hypergraph) returned
    /// `false`; on a hypergraph the value is not an edge count.
    fn edge_count(&self) -> usize;

    /// Iterates over every vertex row in ascending vertex order.
    fn rows(&self) -> Box<dyn Iterator<Item = (VertexId, &IncidenceRow)> + '_>;
}
