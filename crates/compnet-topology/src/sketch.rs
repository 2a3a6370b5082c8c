//! Holder for the equilibrium sketch of a classified network.
//!
//! The sketch captures what an equilibrium computation needs from a network
//! (its topology label and the captive market of every seller) and offers
//! tables for the resulting supports and cumulative distributions. Filling
//! those tables is the job of a solver and is not done here.

use std::collections::{BTreeMap, BTreeSet};

use compnet_core::errors::{CompnetError, ErrorInfo};
use compnet_core::{GroupId, IncidenceStructure, Support, Vertex, VertexId};
use compnet_graph::IncidenceStore;

use crate::class::TopologyClass;
use crate::classify::classify;

/// Equilibrium sketch inputs and result tables for one network.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumSketch {
    class: TopologyClass,
    captive_markets: BTreeMap<VertexId, f64>,
    incidences: BTreeMap<VertexId, BTreeSet<GroupId>>,
    strategies: BTreeMap<VertexId, BTreeMap<GroupId, Vec<Support>>>,
    cumulative_distributions: BTreeMap<VertexId, BTreeMap<usize, f64>>,
}

impl EquilibriumSketch {
    /// Classifies `network` and snapshots the data a solver reads from it.
    pub fn from_network<T: Vertex>(network: &IncidenceStore<T>) -> Self {
        let class = classify(network);
        let captive_markets = network
            .vertices()
            .map(|(vertex, payload)| (vertex, payload.weight()))
            .collect();
        let incidences = network
            .rows()
            .map(|(vertex, row)| (vertex, row.keys().copied().collect()))
            .collect();
        Self {
            class,
            captive_markets,
            incidences,
            strategies: BTreeMap::new(),
            cumulative_distributions: BTreeMap::new(),
        }
    }

    /// Topology label of the sketched network.
    pub fn class(&self) -> TopologyClass {
        self.class
    }

    /// Captive market of `vertex` at the time the sketch was taken.
    pub fn captive_market(&self, vertex: VertexId) -> Option<f64> {
        self.captive_markets.get(&vertex).copied()
    }

    /// Every captive market, keyed by vertex.
    pub fn captive_markets(&self) -> &BTreeMap<VertexId, f64> {
        &self.captive_markets
    }

    /// Supports recorded per seller and competing group.
    pub fn strategies(&self) -> &BTreeMap<VertexId, BTreeMap<GroupId, Vec<Support>>> {
        &self.strategies
    }

    /// Cumulative distribution values recorded per seller and support boundary.
    pub fn cumulative_distributions(&self) -> &BTreeMap<VertexId, BTreeMap<usize, f64>> {
        &self.cumulative_distributions
    }

    /// Appends a support for `vertex` in `group`.
    ///
    /// The vertex must belong to the group in the sketched network.
    pub fn record_support(
        &mut self,
        vertex: VertexId,
        group: GroupId,
        support: Support,
    ) -> Result<(), CompnetError> {
        let incident = self
            .incidences
            .get(&vertex)
            .is_some_and(|groups| groups.contains(&group));
        if !incident {
            return Err(CompnetError::Sketch(
                ErrorInfo::new("not-incident", "vertex does not belong to the group")
                    .with_context("vertex", vertex)
                    .with_context("group", group),
            ));
        }
        self.strategies
            .entry(vertex)
            .or_default()
            .entry(group)
            .or_default()
            .push(support);
        Ok(())
    }

    /// Records `F(boundary)` for `vertex`, replacing any earlier value.
    pub fn record_cumulative(
        &mut self,
        vertex: VertexId,
        boundary: usize,
        value: f64,
    ) -> Result<(), CompnetError> {
        if !self.captive_markets.contains_key(&vertex) {
            return Err(CompnetError::Sketch(
                ErrorInfo::new("unknown-vertex", "vertex is not part of the sketch")
                    .with_context("vertex", vertex),
            ));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(CompnetError::Sketch(
                ErrorInfo::new("invalid-cdf", "cumulative value must lie in [0, 1]")
                    .with_context("vertex", vertex)
                    .with_context("value", value),
            ));
        }
        self.cumulative_distributions
            .entry(vertex)
            .or_default()
            .insert(boundary, value);
        Ok(())
    }
}
