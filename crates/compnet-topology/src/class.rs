use std::fmt;

use serde::{Deserialize, Serialize};

/// Topology label assigned by [`classify`](crate::classify).
///
/// The discriminants are the integer codes exposed to callers that exchange
/// labels as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum TopologyClass {
    /// None of the supported shapes, including every hypergraph.
    NotFound = -1,
    /// Acyclic network with every vertex of degree at most three that
    /// reduces to nothing under repeated leaf pruning.
    BinaryTree = 0,
    /// Simple path.
    Path = 1,
    /// One hub linked to every other vertex.
    Star = 2,
}

impl TopologyClass {
    /// Integer code of the label.
    pub fn code(self) -> i32 {
        self as i8 as i32
    }

    /// Parses an integer code, returning `None` for unknown values.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(TopologyClass::NotFound),
            0 => Some(TopologyClass::BinaryTree),
            1 => Some(TopologyClass::Path),
            2 => Some(TopologyClass::Star),
            _ => None,
        }
    }

    /// Returns `true` for every label except [`TopologyClass::NotFound`].
    pub fn is_recognized(self) -> bool {
        self != TopologyClass::NotFound
    }
}

impl fmt::Display for TopologyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopologyClass::NotFound => "not-found",
            TopologyClass::BinaryTree => "binary-tree",
            TopologyClass::Path => "path",
            TopologyClass::Star => "star",
        };
        f.write_str(name)
    }
}
