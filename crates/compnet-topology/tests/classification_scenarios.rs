use compnet_core::{IncidenceStructure, Seller, VertexId};
use compnet_graph::CompetitionNetwork;
use compnet_topology::{
    classify, is_binary_tree, is_path, is_star, prune_leaves, HypergraphCheck, TopologyClass,
};

const CAPTIVE_MARKETS: [f64; 8] = [120.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

fn create_seller(vertex: VertexId) -> Seller {
    Seller::new(
        format!("seller-{vertex}"),
        CAPTIVE_MARKETS[vertex.as_raw() as usize],
    )
}

fn network(groups: &[(&[u64], f64)]) -> CompetitionNetwork {
    let mut net = CompetitionNetwork::default();
    for (members, weight) in groups {
        let members: Vec<VertexId> = members.iter().copied().map(VertexId::from_raw).collect();
        net.create_group(&members, *weight, create_seller).unwrap();
    }
    net
}

fn binary_tree() -> CompetitionNetwork {
    network(&[
        (&[0, 1], 185.0),
        (&[1, 2], 150.0),
        (&[2, 3], 120.0),
        (&[1, 4], 120.0),
        (&[2, 5], 120.0),
    ])
}

#[test]
fn binary_tree_is_recognised() {
    let net = binary_tree();
    assert_eq!(classify(&net), TopologyClass::BinaryTree);
    assert_eq!(classify(&net).code(), 0);
}

#[test]
fn path_is_recognised() {
    let net = network(&[
        (&[0, 1], 1.0),
        (&[1, 2], 1.0),
        (&[2, 3], 1.0),
        (&[3, 4], 1.0),
    ]);
    assert_eq!(classify(&net), TopologyClass::Path);
}

#[test]
fn star_is_recognised() {
    let net = network(&[
        (&[0, 1], 1.0),
        (&[0, 2], 1.0),
        (&[0, 3], 1.0),
        (&[0, 4], 1.0),
    ]);
    assert_eq!(classify(&net), TopologyClass::Star);
}

#[test]
fn hypergraph_is_rejected() {
    let net = network(&[(&[0, 1, 2], 1.0)]);
    assert!(net.is_hypergraph());
    assert_eq!(classify(&net), TopologyClass::NotFound);
    assert_eq!(classify(&net).code(), -1);
}

#[test]
fn triangle_is_rejected() {
    let net = network(&[(&[0, 1], 1.0), (&[1, 2], 1.0), (&[2, 0], 1.0)]);
    assert!(!is_binary_tree(&net, HypergraphCheck::Verify));
    assert!(!is_path(&net, HypergraphCheck::Verify));
    assert!(!is_star(&net, HypergraphCheck::Verify));
    assert_eq!(classify(&net), TopologyClass::NotFound);
}

#[test]
fn single_edge_prefers_path_over_star() {
    let net = network(&[(&[0, 1], 1.0)]);
    assert!(is_star(&net, HypergraphCheck::Verify));
    assert!(is_path(&net, HypergraphCheck::Verify));
    assert_eq!(classify(&net), TopologyClass::Path);
}

#[test]
fn three_spoke_star_falls_through_to_star() {
    let net = network(&[(&[0, 1], 1.0), (&[0, 2], 1.0), (&[0, 3], 1.0)]);
    assert!(!is_binary_tree(&net, HypergraphCheck::Verify));
    assert_eq!(classify(&net), TopologyClass::Star);
}

#[test]
fn classification_is_idempotent() {
    let net = binary_tree();
    let first = classify(&net);
    let second = classify(&net);
    assert_eq!(first, second);
}

#[test]
fn classification_leaves_network_unchanged() {
    let net = binary_tree();
    let before = net.clone();
    let rendered = net.to_string();
    assert_eq!(classify(&net), TopologyClass::BinaryTree);
    assert_eq!(net.to_string(), rendered);
    let rows_before: Vec<_> = before.rows().map(|(v, row)| (v, row.clone())).collect();
    let rows_after: Vec<_> = net.rows().map(|(v, row)| (v, row.clone())).collect();
    assert_eq!(rows_before, rows_after);
    assert_eq!(net.vertex_count(), 6);
}

#[test]
fn captive_markets_survive_classification() {
    let net = binary_tree();
    classify(&net);
    assert_eq!(
        net.vertex(VertexId::from_raw(0)).unwrap().captive_market,
        120.0
    );
}

#[test]
fn complete_binary_tree_centred_on_root_is_not_recognised() {
    let net = network(&[
        (&[0, 1], 1.0),
        (&[0, 2], 1.0),
        (&[1, 3], 1.0),
        (&[1, 4], 1.0),
        (&[2, 5], 1.0),
        (&[2, 6], 1.0),
    ]);
    let outcome = prune_leaves(&net);
    assert_eq!(outcome.passes, 2);
    assert_eq!(
        outcome.residual.into_iter().collect::<Vec<_>>(),
        vec![VertexId::from_raw(0)]
    );
    assert!(!is_binary_tree(&net, HypergraphCheck::Verify));
    assert!(!is_path(&net, HypergraphCheck::Verify));
    assert!(!is_star(&net, HypergraphCheck::Verify));
    assert_eq!(classify(&net), TopologyClass::NotFound);
}

#[test]
fn binary_tree_centred_on_an_edge_is_recognised() {
    let net = network(&[
        (&[0, 1], 1.0),
        (&[0, 2], 1.0),
        (&[0, 3], 1.0),
        (&[1, 4], 1.0),
        (&[1, 5], 1.0),
    ]);
    assert!(prune_leaves(&net).is_exhausted());
    assert_eq!(classify(&net), TopologyClass::BinaryTree);
}
