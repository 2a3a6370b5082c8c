use std::collections::{BTreeMap, BTreeSet};

use compnet_core::{
    errors::{CompnetError, ErrorInfo},
    GroupId, IncidenceRow, IncidenceStructure, Seller, VertexId,
};
use tracing::trace;

use crate::flags::NetworkConfig;

/// Vertex-by-group incidence store.
///
/// The incidence rows are the authoritative state: a group's membership is
/// recovered by scanning the rows for its key, and its weight is replicated
/// into every member row.
#[derive(Debug, Clone)]
pub struct IncidenceStore<T> {
    config: NetworkConfig,
    vertices: BTreeMap<VertexId, T>,
    incidence: BTreeMap<VertexId, IncidenceRow>,
    next_group: u64,
}

/// Incidence store whose vertices are sellers.
pub type CompetitionNetwork = IncidenceStore<Seller>;

impl<T> IncidenceStore<T> {
    /// Creates an empty store with the provided configuration.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            vertices: BTreeMap::new(),
            incidence: BTreeMap::new(),
            next_group: 0,
        }
    }

    /// Returns the configuration used by this store.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Creates a new group linking `members` with the given `weight`.
    ///
    /// `factory` is invoked once per listed member and its result replaces
    /// any payload previously stored for that index, so the last group that
    /// names a vertex decides its payload. Repeated indices in `members` are
    /// processed once per occurrence but only add one incidence. Nothing is
    /// mutated when validation fails.
    pub fn create_group<F>(
        &mut self,
        members: &[VertexId],
        weight: f64,
        mut factory: F,
    ) -> Result<GroupId, CompnetError>
    where
        F: FnMut(VertexId) -> T,
    {
        self.validate_group(members, weight)?;
        let group = GroupId::from_raw(self.next_group);
        for &member in members {
            self.incidence
                .entry(member)
                .or_default()
                .insert(group, weight);
            self.vertices.insert(member, factory(member));
        }
        self.next_group += 1;
        trace!(
            group = group.as_raw(),
            members = members.len(),
            weight,
            "group created"
        );
        Ok(group)
    }

    /// Adding a single vertex to an existing group is not supported.
    pub fn add_to_group(&mut self, vertex: VertexId, group: GroupId) -> Result<(), CompnetError> {
        Err(unsupported("add_to_group", vertex, group))
    }

    /// Removing a single vertex from an existing group is not supported.
    pub fn remove_from_group(
        &mut self,
        vertex: VertexId,
        group: GroupId,
    ) -> Result<(), CompnetError> {
        Err(unsupported("remove_from_group", vertex, group))
    }

    /// Returns the payload stored for `vertex`.
    pub fn vertex(&self, vertex: VertexId) -> Option<&T> {
        self.vertices.get(&vertex)
    }

    /// Iterates over every stored payload in ascending vertex order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &T)> + '_ {
        self.vertices.iter().map(|(id, payload)| (*id, payload))
    }

    /// Number of vertices mentioned by at least one group.
    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    /// Number of groups created so far.
    pub fn group_count(&self) -> usize {
        self.next_group as usize
    }

    /// Returns the incidence row of `vertex`.
    pub fn row(&self, vertex: VertexId) -> Option<&IncidenceRow> {
        self.incidence.get(&vertex)
    }

    /// Returns the weight of `group`, or `None` for an unknown key.
    pub fn group_weight(&self, group: GroupId) -> Option<f64> {
        self.incidence
            .values()
            .find_map(|row| row.get(&group).copied())
    }

    /// Returns the members of `group` in ascending vertex order.
    pub fn group_members(&self, group: GroupId) -> Vec<VertexId> {
        self.incidence
            .iter()
            .filter(|(_, row)| row.contains_key(&group))
            .map(|(vertex, _)| *vertex)
            .collect()
    }

    /// Number of distinct groups incident to `vertex`; zero when absent.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.incidence.get(&vertex).map_or(0, |row| row.len())
    }

    /// Largest degree over all vertices, zero for an empty store.
    pub fn max_degree(&self) -> usize {
        self.incidence.values().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Returns `true` when some group is incident to more than two vertices.
    pub fn is_hypergraph(&self) -> bool {
        let mut members: BTreeMap<GroupId, usize> = BTreeMap::new();
        for row in self.incidence.values() {
            for group in row.keys() {
                *members.entry(*group).or_default() += 1;
            }
        }
        members.values().any(|count| *count > 2)
    }

    /// Total number of incidences divided by two.
    ///
    /// Callers must confirm [`is_hypergraph`](Self::is_hypergraph) is `false`
    /// first; use [`try_edge_count`](Self::try_edge_count) for a checked value.
    pub fn edge_count(&self) -> usize {
        self.incidence.values().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Edge count that rejects hypergraphs instead of returning a bogus value.
    pub fn try_edge_count(&self) -> Result<usize, CompnetError> {
        if self.is_hypergraph() {
            return Err(CompnetError::Graph(
                ErrorInfo::new(
                    "hypergraph-edge-count",
                    "edge count is undefined for a hypergraph",
                )
                .with_hint("check is_hypergraph before counting edges"),
            ));
        }
        Ok(self.edge_count())
    }

    fn validate_group(&self, members: &[VertexId], weight: f64) -> Result<(), CompnetError> {
        if members.is_empty() {
            return Err(graph_error("empty-group", "a group needs at least one member"));
        }
        let mut distinct = BTreeSet::new();
        for member in members {
            if !distinct.insert(*member) && !self.config.allow_duplicate_members {
                return Err(
                    graph_error("duplicate-member", "member list repeats a vertex")
                        .with_context("vertex", member),
                );
            }
        }
        if distinct.len() < self.config.min_group_size {
            return Err(graph_error(
                "group-too-small",
                "group has fewer distinct members than configured",
            )
            .with_context("members", distinct.len())
            .with_context("min", self.config.min_group_size));
        }
        if !weight.is_finite() {
            return Err(graph_error("invalid-weight", "group weight must be finite")
                .with_context("weight", weight));
        }
        if weight < 0.0 && !self.config.allow_negative_weights {
            return Err(
                graph_error("invalid-weight", "group weight must not be negative")
                    .with_context("weight", weight),
            );
        }
        Ok(())
    }
}

impl<T> Default for IncidenceStore<T> {
    fn default() -> Self {
        Self::new(NetworkConfig::default())
    }
}

impl<T> IncidenceStructure for IncidenceStore<T> {
    fn vertex_count(&self) -> usize {
        IncidenceStore::vertex_count(self)
    }

    fn degree(&self, vertex: VertexId) -> usize {
        IncidenceStore::degree(self, vertex)
    }

    fn is_hypergraph(&self) -> bool {
        IncidenceStore::is_hypergraph(self)
    }

    fn edge_count(&self) -> usize {
        IncidenceStore::edge_count(self)
    }

    fn rows(&self) -> Box<dyn Iterator<Item = (VertexId, &IncidenceRow)> + '_> {
        Box::new(self.incidence.iter().map(|(vertex, row)| (*vertex, row)))
    }
}

fn unsupported(operation: &str, vertex: VertexId, group: GroupId) -> CompnetError {
    CompnetError::Unsupported(
        ErrorInfo::new(
            "unsupported-operation",
            "single-vertex group edits are not supported",
        )
        .with_context("operation", operation)
        .with_context("vertex", vertex)
        .with_context("group", group)
        .with_hint("create a new group instead"),
    )
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> CompnetError {
    CompnetError::Graph(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> CompnetError;
}

impl ContextExt for CompnetError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> CompnetError {
        match self {
            CompnetError::Graph(info) => CompnetError::Graph(info.with_context(key, value)),
            other => other,
        }
    }
}
