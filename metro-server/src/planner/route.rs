//! Route found by the planner.

use crate::domain::Station;

/// Total cost of a route: the sum of the weights along it.
pub type Distance = u64;

/// A shortest route between two stations.
///
/// The path always contains at least one station. It starts at the
/// requested origin and ends at the requested destination; a route from a
/// station to itself is just that station with distance 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    distance: Distance,
    path: Vec<Station>,
}

impl Route {
    pub(super) fn new(distance: Distance, path: Vec<Station>) -> Self {
        debug_assert!(!path.is_empty());
        Self { distance, path }
    }

    /// Total distance of the route.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Stations visited, in order, including both ends.
    pub fn path(&self) -> &[Station] {
        &self.path
    }

    /// The first station of the route.
    pub fn start(&self) -> &Station {
        &self.path[0]
    }

    /// The last station of the route.
    pub fn end(&self) -> &Station {
        &self.path[self.path.len() - 1]
    }

    /// Consecutive station pairs, one per connection travelled.
    pub fn hops(&self) -> impl Iterator<Item = (&Station, &Station)> + '_ {
        self.path.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Whether the route travels directly between `a` and `b`, in either
    /// direction.
    pub fn uses_connection(&self, a: &Station, b: &Station) -> bool {
        self.hops()
            .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
    }

    /// Whether the route passes through a station.
    pub fn visits(&self, station: &Station) -> bool {
        self.path.contains(station)
    }
}
