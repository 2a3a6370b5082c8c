use serde::{Deserialize, Serialize};

/// Validation options applied by [`IncidenceStore::create_group`](crate::IncidenceStore::create_group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Minimum number of distinct members a new group must name.
    ///
    /// Empty member lists are rejected regardless of this value.
    pub min_group_size: usize,
    /// Whether groups may carry a negative competitive intensity.
    pub allow_negative_weights: bool,
    /// Whether a member list may repeat a vertex index.
    pub allow_duplicate_members: bool,
}

impl NetworkConfig {
    /// Lax validation: singleton groups and negative weights are accepted.
    pub fn permissive() -> Self {
        Self {
            min_group_size: 1,
            allow_negative_weights: true,
            allow_duplicate_members: true,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_group_size: 2,
            allow_negative_weights: false,
            allow_duplicate_members: true,
        }
    }
}
