//! Graph store error types.
//!
//! `GraphError` covers malformed network definitions and is raised while
//! building a store. `UnknownStation` is raised by lookups against a store
//! that was built successfully.

use crate::domain::{InvalidStation, Station};

use super::Weight;

/// A lookup referenced a station that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {0}")]
pub struct UnknownStation(pub Station);

/// Errors detected while constructing a graph store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A station name failed validation
    #[error("{0}")]
    InvalidStation(#[from] InvalidStation),

    /// A station lists a neighbour that has no adjacency entry of its own
    #[error("{from} lists neighbour {to}, which is not a station")]
    DanglingNeighbor { from: Station, to: Station },

    /// A connection is listed in one direction only
    #[error("connection {from} -> {to} has no matching {to} -> {from}")]
    AsymmetricEdge { from: Station, to: Station },

    /// The two directions of a connection disagree on weight
    #[error("connection {from} <-> {to} has weights {forward} and {backward}")]
    WeightMismatch {
        from: Station,
        to: Station,
        forward: Weight,
        backward: Weight,
    },

    /// Weights must be strictly positive
    #[error("connection {from} <-> {to} has non-positive weight {weight}")]
    NonPositiveWeight {
        from: Station,
        to: Station,
        weight: i64,
    },

    /// A station is listed as its own neighbour
    #[error("station {0} is connected to itself")]
    SelfLoop(Station),

    /// The same connection was defined twice with different weights
    #[error("connection {from} <-> {to} defined as both {first} and {second}")]
    ConflictingEdge {
        from: Station,
        to: Station,
        first: Weight,
        second: Weight,
    },
}
