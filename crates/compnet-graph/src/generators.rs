use compnet_core::errors::{CompnetError, ErrorInfo};
use compnet_core::{Seller, VertexId};
use rand::Rng;

use crate::incidence::CompetitionNetwork;

const DEFAULT_WEIGHT: f64 = 1.0;

fn seller(vertex: VertexId) -> Seller {
    Seller::new(format!("seller-{vertex}"), 0.0)
}

fn pair(a: u64, b: u64) -> [VertexId; 2] {
    [VertexId::from_raw(a), VertexId::from_raw(b)]
}

fn too_small(shape: &str, requested: usize, minimum: usize) -> CompnetError {
    CompnetError::Graph(
        ErrorInfo::new("generator-size", "generator needs more vertices")
            .with_context("shape", shape)
            .with_context("requested", requested)
            .with_context("min", minimum),
    )
}

/// Builds the path `0 - 1 - ... - (n - 1)`.
pub fn gen_path(n_vertices: usize) -> Result<CompetitionNetwork, CompnetError> {
    if n_vertices < 2 {
        return Err(too_small("path", n_vertices, 2));
    }
    let mut net = CompetitionNetwork::default();
    for i in 1..n_vertices as u64 {
        net.create_group(&pair(i - 1, i), DEFAULT_WEIGHT, seller)?;
    }
    Ok(net)
}

/// Builds a star with hub `0` and spokes `1..=spokes`.
pub fn gen_star(spokes: usize) -> Result<CompetitionNetwork, CompnetError> {
    if spokes == 0 {
        return Err(too_small("star", spokes + 1, 2));
    }
    let mut net = CompetitionNetwork::default();
    for spoke in 1..=spokes as u64 {
        net.create_group(&pair(0, spoke), DEFAULT_WEIGHT, seller)?;
    }
    Ok(net)
}

/// Builds the cycle `0 - 1 - ... - (n - 1) - 0`.
pub fn gen_cycle(n_vertices: usize) -> Result<CompetitionNetwork, CompnetError> {
    if n_vertices < 3 {
        return Err(too_small("cycle", n_vertices, 3));
    }
    let n = n_vertices as u64;
    let mut net = CompetitionNetwork::default();
    for i in 0..n {
        net.create_group(&pair(i, (i + 1) % n), DEFAULT_WEIGHT, seller)?;
    }
    Ok(net)
}

/// Builds a random tree on `n_vertices` vertices where no vertex exceeds
/// `max_degree`.
///
/// Vertex `i` attaches to a uniformly chosen earlier vertex that still has
/// spare degree, so the result is always connected and acyclic.
pub fn gen_bounded_tree(
    n_vertices: usize,
    max_degree: usize,
    rng: &mut impl Rng,
) -> Result<CompetitionNetwork, CompnetError> {
    if n_vertices < 2 {
        return Err(too_small("tree", n_vertices, 2));
    }
    if max_degree < 2 {
        return Err(CompnetError::Graph(
            ErrorInfo::new("generator-degree", "degree cap too low to grow a tree")
                .with_context("max_degree", max_degree),
        ));
    }
    let mut degrees = vec![0usize; n_vertices];
    let mut net = CompetitionNetwork::default();
    net.create_group(&pair(0, 1), DEFAULT_WEIGHT, seller)?;
    degrees[0] = 1;
    degrees[1] = 1;
    for child in 2..n_vertices {
        let open: Vec<usize> = (0..child)
            .filter(|&candidate| degrees[candidate] < max_degree)
            .collect();
        let parent = open[rng.gen_range(0..open.len())];
        net.create_group(&pair(parent as u64, child as u64), DEFAULT_WEIGHT, seller)?;
        degrees[parent] += 1;
        degrees[child] = 1;
    }
    Ok(net)
}
