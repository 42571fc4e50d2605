//! Weighted station graph.
//!
//! The graph is undirected and read-only once built. All invariants
//! (symmetry, positive weights) are enforced at construction time so that
//! the route finder can trust them.

mod error;
mod store;

pub use error::{GraphError, UnknownStation};
pub use store::{GraphStore, GraphStoreBuilder};

/// Cost of travelling over a single connection.
pub type Weight = u32;
