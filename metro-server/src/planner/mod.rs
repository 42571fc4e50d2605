//! Route planner using Dijkstra's algorithm.
//!
//! This module answers: "what is the cheapest way from this station to
//! that one?" over a [`GraphStore`](crate::graph::GraphStore). Searches are
//! self-contained; nothing is cached between calls.

mod route;
mod search;

pub use route::{Distance, Route};
pub use search::RouteFinder;
