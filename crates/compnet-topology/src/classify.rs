use compnet_core::IncidenceStructure;
use tracing::debug;

use crate::class::TopologyClass;
use crate::pruning::prune_leaves;

/// A binary-tree vertex has at most one parent edge and two child edges.
pub const MAX_BINARY_TREE_DEGREE: usize = 3;

/// Whether a predicate re-verifies that the structure is not a hypergraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HypergraphCheck {
    /// Trust the caller; [`classify`] has already checked.
    #[default]
    Assume,
    /// Reject hypergraphs before evaluating the predicate.
    Verify,
}

impl HypergraphCheck {
    fn rejects<S: IncidenceStructure + ?Sized>(self, structure: &S) -> bool {
        self == HypergraphCheck::Verify && structure.is_hypergraph()
    }
}

/// Assigns a topology label to `structure`.
///
/// The checks run in a fixed order and the first match wins: hypergraphs
/// are rejected, then path, binary tree and star are tried in turn. A
/// two-vertex network therefore classifies as a path even though it is also
/// a degenerate star.
pub fn classify<S: IncidenceStructure + ?Sized>(structure: &S) -> TopologyClass {
    let class = if structure.is_hypergraph() {
        TopologyClass::NotFound
    } else if is_path(structure, HypergraphCheck::Assume) {
        TopologyClass::Path
    } else if is_binary_tree(structure, HypergraphCheck::Assume) {
        TopologyClass::BinaryTree
    } else if is_star(structure, HypergraphCheck::Assume) {
        TopologyClass::Star
    } else {
        TopologyClass::NotFound
    };
    debug!(
        %class,
        vertices = structure.vertex_count(),
        "topology classified"
    );
    class
}

/// Returns `true` when the network is a binary tree.
///
/// Any vertex above [`MAX_BINARY_TREE_DEGREE`] rejects immediately;
/// otherwise the network must vanish under [`prune_leaves`].
pub fn is_binary_tree<S: IncidenceStructure + ?Sized>(
    structure: &S,
    check: HypergraphCheck,
) -> bool {
    if check.rejects(structure) {
        return false;
    }
    if let Some((vertex, row)) = structure
        .rows()
        .find(|(_, row)| row.len() > MAX_BINARY_TREE_DEGREE)
    {
        debug!(
            vertex = vertex.as_raw(),
            degree = row.len(),
            "degree too high for a binary tree"
        );
        return false;
    }
    let outcome = prune_leaves(structure);
    debug!(
        passes = outcome.passes,
        residual = outcome.residual.len(),
        "binary tree reduction finished"
    );
    outcome.is_exhausted()
}

/// Returns `true` when the network is a simple path: one more vertex than
/// edges and exactly two endpoints, every other vertex having degree two.
pub fn is_path<S: IncidenceStructure + ?Sized>(structure: &S, check: HypergraphCheck) -> bool {
    if check.rejects(structure) {
        return false;
    }
    let vertices = structure.vertex_count();
    let edges = structure.edge_count();
    if vertices != edges + 1 {
        debug!(vertices, edges, "not a tree, so not a path");
        return false;
    }
    let interior = count_degree(structure, 2);
    let endpoints = vertices - interior;
    debug!(vertices, interior, endpoints, "path check finished");
    endpoints == 2
}

/// Returns `true` when the network is a star: a single hub and every other
/// vertex of degree one. Networks of at most two vertices count as stars.
pub fn is_star<S: IncidenceStructure + ?Sized>(structure: &S, check: HypergraphCheck) -> bool {
    if check.rejects(structure) {
        return false;
    }
    let vertices = structure.vertex_count();
    if vertices <= 2 {
        debug!(vertices, "degenerate star");
        return true;
    }
    let spokes = count_degree(structure, 1);
    let hubs = vertices - spokes;
    debug!(vertices, spokes, hubs, "star check finished");
    hubs == 1
}

fn count_degree<S: IncidenceStructure + ?Sized>(structure: &S, degree: usize) -> usize {
    structure
        .rows()
        .filter(|(_, row)| row.len() == degree)
        .count()
}

/// Method-style access to [`classify`].
pub trait Classify {
    /// Assigns a topology label to `self`.
    fn topology_class(&self) -> TopologyClass;
}

impl<S: IncidenceStructure + ?Sized> Classify for S {
    fn topology_class(&self) -> TopologyClass {
        classify(self)
    }
}
