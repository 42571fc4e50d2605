//! Dijkstra route search.
//!
//! Finds the cheapest route between two stations of a [`GraphStore`].
//! The queue uses lazy deletion: a station may be queued several times, and
//! every entry after the first one popped for that station is discarded.
//! Paths are rebuilt from predecessor links once the destination is reached.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::graph::{GraphStore, UnknownStation};

use super::route::{Distance, Route};

/// Priority queue entry.
///
/// Field order matters: the derived ordering compares distance first, then
/// station name, then predecessor name, which makes extraction order (and
/// therefore the route chosen among equal-cost ones) fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    distance: Distance,
    station: Station,
    via: Option<Station>,
}

/// Shortest-route finder over a read-only graph.
///
/// Holds no state between calls, so a single finder can serve any number of
/// searches, including from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct RouteFinder<'a> {
    graph: &'a GraphStore,
}

impl<'a> RouteFinder<'a> {
    /// Create a route finder for a graph.
    pub fn new(graph: &'a GraphStore) -> Self {
        Self { graph }
    }

    /// Find the cheapest route from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached from `start`. Asking
    /// for a route from a station to itself gives a zero-distance route
    /// containing only that station.
    pub fn find_route(
        &self,
        start: &Station,
        end: &Station,
    ) -> Result<Option<Route>, UnknownStation> {
        if !self.graph.contains(start) {
            return Err(UnknownStation(start.clone()));
        }
        if !self.graph.contains(end) {
            return Err(UnknownStation(end.clone()));
        }

        // Finalized stations, each mapped to the station it was reached from.
        let mut predecessors: HashMap<Station, Option<Station>> = HashMap::new();
        let mut queue = BinaryHeap::new();

        queue.push(Reverse(QueueEntry {
            distance: 0,
            station: start.clone(),
            via: None,
        }));

        while let Some(Reverse(entry)) = queue.pop() {
            // Stale entry: already reached more cheaply (or equally, with an
            // earlier tie-break).
            if predecessors.contains_key(&entry.station) {
                continue;
            }
            predecessors.insert(entry.station.clone(), entry.via);

            trace!(station = %entry.station, distance = entry.distance, "finalized");

            if &entry.station == end {
                let path = reconstruct_path(&predecessors, entry.station);
                debug!(
                    %start,
                    %end,
                    distance = entry.distance,
                    stops = path.len(),
                    finalized = predecessors.len(),
                    "route found"
                );
                return Ok(Some(Route::new(entry.distance, path)));
            }

            for (neighbour, weight) in self.graph.neighbors(&entry.station)? {
                if predecessors.contains_key(neighbour) {
                    continue;
                }
                queue.push(Reverse(QueueEntry {
                    distance: entry.distance + Distance::from(*weight),
                    station: neighbour.clone(),
                    via: Some(entry.station.clone()),
                }));
            }
        }

        debug!(%start, %end, finalized = predecessors.len(), "no route");
        Ok(None)
    }
}

/// Walk predecessor links back from `end` and return the path start-first.
fn reconstruct_path(
    predecessors: &HashMap<Station, Option<Station>>,
    end: Station,
) -> Vec<Station> {
    let mut path = vec![end];
    while let Some(Some(prev)) = path.last().and_then(|s| predecessors.get(s)) {
        path.push(prev.clone());
    }
    path.reverse();
    path
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
