use std::collections::BTreeSet;

use compnet_core::{GroupId, IncidenceStructure, Seller, VertexId};
use compnet_graph::{CompetitionNetwork, NetworkConfig};
use proptest::prelude::*;

fn seller(vertex: VertexId) -> Seller {
    Seller::new(format!("seller-{vertex}"), 0.0)
}

fn member_lists() -> impl Strategy<Value = Vec<Vec<u64>>> {
    prop::collection::vec(prop::collection::btree_set(0u64..12, 2..5), 1..10)
        .prop_map(|groups| groups.into_iter().map(|g| g.into_iter().collect()).collect())
}

fn build(groups: &[Vec<u64>]) -> CompetitionNetwork {
    let mut net = CompetitionNetwork::new(NetworkConfig::permissive());
    for (idx, members) in groups.iter().enumerate() {
        let members: Vec<VertexId> = members.iter().copied().map(VertexId::from_raw).collect();
        net.create_group(&members, idx as f64 + 0.5, seller).unwrap();
    }
    net
}

proptest! {
    #[test]
    fn hypergraph_iff_some_group_has_three_members(groups in member_lists()) {
        let net = build(&groups);
        let expected = groups.iter().any(|members| members.len() >= 3);
        prop_assert_eq!(net.is_hypergraph(), expected);
    }

    #[test]
    fn edge_count_matches_group_count_for_simple_graphs(groups in member_lists()) {
        let net = build(&groups);
        if !net.is_hypergraph() {
            prop_assert_eq!(net.edge_count(), groups.len());
            prop_assert_eq!(net.try_edge_count().unwrap(), groups.len());
        }
    }

    #[test]
    fn every_group_key_is_consistent(groups in member_lists()) {
        let net = build(&groups);
        for (idx, members) in groups.iter().enumerate() {
            let group = GroupId::from_raw(idx as u64);
            let expected: Vec<VertexId> = members.iter().copied().map(VertexId::from_raw).collect();
            prop_assert_eq!(net.group_members(group), expected);
            for (_, row) in net.rows() {
                if let Some(weight) = row.get(&group) {
                    prop_assert_eq!(*weight, idx as f64 + 0.5);
                }
            }
        }
    }

    #[test]
    fn degree_counts_distinct_groups(groups in member_lists()) {
        let net = build(&groups);
        let vertices: BTreeSet<u64> = groups.iter().flatten().copied().collect();
        prop_assert_eq!(net.vertex_count(), vertices.len());
        for vertex in vertices {
            let expected = groups.iter().filter(|g| g.contains(&vertex)).count();
            prop_assert_eq!(net.degree(VertexId::from_raw(vertex)), expected);
        }
    }
}
