use std::collections::{BTreeMap, BTreeSet};

use compnet_core::{GroupId, IncidenceStructure, VertexId};
use tracing::trace;

/// Result of repeatedly peeling leaves off a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOutcome {
    /// Number of passes that removed at least one leaf.
    pub passes: usize,
    /// Vertices left once no pass removes anything.
    pub residual: BTreeSet<VertexId>,
}

impl PruneOutcome {
    /// Returns `true` when every vertex was peeled away.
    pub fn is_exhausted(&self) -> bool {
        self.residual.is_empty()
    }
}

/// Working copy of the incidence keys, rebuilt row by row from the source.
///
/// Weights are irrelevant to pruning, so only group keys are copied.
type WorkingRows = BTreeMap<VertexId, BTreeSet<GroupId>>;

fn working_copy<S: IncidenceStructure + ?Sized>(structure: &S) -> WorkingRows {
    structure
        .rows()
        .map(|(vertex, row)| (vertex, row.keys().copied().collect()))
        .collect()
}

/// Peels leaves off a private copy of `structure` until nothing changes.
///
/// Each pass removes every vertex of degree one as a batch, then strips any
/// group still referenced by a single remaining vertex, since its other
/// endpoint was just removed. A forest whose trees each have a central edge
/// reduces to nothing; a cycle, or a tree centred on a single vertex, leaves
/// a residue. The caller's structure is never modified.
pub fn prune_leaves<S: IncidenceStructure + ?Sized>(structure: &S) -> PruneOutcome {
    let mut working = working_copy(structure);
    let mut passes = 0;
    loop {
        let leaves: Vec<VertexId> = working
            .iter()
            .filter(|(_, groups)| groups.len() == 1)
            .map(|(vertex, _)| *vertex)
            .collect();
        if leaves.is_empty() {
            break;
        }
        passes += 1;
        for leaf in &leaves {
            working.remove(leaf);
        }

        let mut references: BTreeMap<GroupId, usize> = BTreeMap::new();
        for groups in working.values() {
            for group in groups {
                *references.entry(*group).or_default() += 1;
            }
        }
        let dangling: BTreeSet<GroupId> = references
            .into_iter()
            .filter(|(_, count)| *count == 1)
            .map(|(group, _)| group)
            .collect();
        if !dangling.is_empty() {
            for groups in working.values_mut() {
                groups.retain(|group| !dangling.contains(group));
            }
        }
        trace!(
            pass = passes,
            removed = leaves.len(),
            dangling = dangling.len(),
            remaining = working.len(),
            "leaf pruning pass"
        );
    }
    PruneOutcome {
        passes,
        residual: working.into_keys().collect(),
    }
}
