//! Immutable adjacency store for the metro network.

use std::collections::{BTreeSet, HashMap};

use crate::domain::Station;

use super::Weight;
use super::error::{GraphError, UnknownStation};

/// An undirected, positively weighted graph of stations.
///
/// Every connection is stored in both directions with the same weight, and
/// every weight is at least 1. Both invariants are checked when the store is
/// built; there is no way to change a store afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphStore {
    adjacency: HashMap<Station, HashMap<Station, Weight>>,
}

impl GraphStore {
    /// Build a store from a full adjacency table.
    ///
    /// The table lists, for every station, each neighbour and the weight of
    /// the connection to it. Each connection must therefore appear twice
    /// (once from each end) with the same weight. Stations with no
    /// neighbours are listed with an empty map.
    ///
    /// Repeating a row or a neighbour is allowed only if the weights agree.
    /// A station listed as its own neighbour is rejected.
    ///
    /// Weights are taken as signed integers so that zero and negative values
    /// are reported rather than silently wrapped.
    pub fn from_adjacency<I, N, S>(table: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut raw: HashMap<Station, HashMap<Station, i64>> = HashMap::new();
        for (name, neighbours) in table {
            let station = Station::parse(name.as_ref())?;
            let entry = raw.entry(station.clone()).or_default();
            for (neighbour, weight) in neighbours {
                let neighbour = Station::parse(neighbour.as_ref())?;
                if neighbour == station {
                    return Err(GraphError::SelfLoop(station));
                }

                // A station row or a neighbour may be listed more than once,
                // but only with the same weight each time.
                if let Some(first) = entry.insert(neighbour.clone(), weight)
                    && first != weight
                {
                    return Err(GraphError::ConflictingEdge {
                        first: positive_weight(&station, &neighbour, first)?,
                        second: positive_weight(&station, &neighbour, weight)?,
                        from: station,
                        to: neighbour,
                    });
                }
            }
        }

        let mut adjacency: HashMap<Station, HashMap<Station, Weight>> =
            HashMap::with_capacity(raw.len());

        for (from, neighbours) in &raw {
            let mut checked = HashMap::with_capacity(neighbours.len());
            for (to, &weight) in neighbours {
                let weight = positive_weight(from, to, weight)?;

                let reverse = raw
                    .get(to)
                    .ok_or_else(|| GraphError::DanglingNeighbor {
                        from: from.clone(),
                        to: to.clone(),
                    })?
                    .get(from)
                    .ok_or_else(|| GraphError::AsymmetricEdge {
                        from: from.clone(),
                        to: to.clone(),
                    })?;
                let reverse = positive_weight(to, from, *reverse)?;

                if reverse != weight {
                    return Err(GraphError::WeightMismatch {
                        from: from.clone(),
                        to: to.clone(),
                        forward: weight,
                        backward: reverse,
                    });
                }

                checked.insert(to.clone(), weight);
            }
            adjacency.insert(from.clone(), checked);
        }

        Ok(Self { adjacency })
    }

    /// Get the neighbours of a station and the weight of each connection.
    pub fn neighbors(&self, station: &Station) -> Result<&HashMap<Station, Weight>, UnknownStation> {
        self.adjacency
            .get(station)
            .ok_or_else(|| UnknownStation(station.clone()))
    }

    /// All stations in the graph, sorted by name.
    pub fn stations(&self) -> BTreeSet<Station> {
        self.adjacency.keys().cloned().collect()
    }

    /// Check whether a station is in the graph.
    pub fn contains(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Get the weight of the direct connection between two stations, if any.
    pub fn weight(&self, from: &Station, to: &Station) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Iterate over every connection once, as `(a, b, weight)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (&Station, &Station, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(from, neighbours)| {
            neighbours
                .iter()
                .filter(move |(to, _)| from < *to)
                .map(move |(to, weight)| (from, to, *weight))
        })
    }

    /// Returns the number of stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of connections (counting A-B and B-A as one).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no stations.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

fn positive_weight(from: &Station, to: &Station, weight: i64) -> Result<Weight, GraphError> {
    Weight::try_from(weight)
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(|| GraphError::NonPositiveWeight {
            from: from.clone(),
            to: to.clone(),
            weight,
        })
}

/// Builder for creating graph stores one connection at a time.
///
/// Connections are stored symmetrically, so the builder can only produce
/// asymmetric graphs if asked for conflicting weights, which `build` rejects.
#[derive(Debug, Default)]
pub struct GraphStoreBuilder {
    adjacency: HashMap<Station, HashMap<Station, Weight>>,
    error: Option<GraphError>,
}

impl GraphStoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station, with no connections yet.
    pub fn station(mut self, name: &str) -> Self {
        if let Some(station) = self.parse(name) {
            self.adjacency.entry(station).or_default();
        }
        self
    }

    /// Add a connection between two stations, adding the stations as needed.
    pub fn connect(mut self, a: &str, b: &str, weight: Weight) -> Self {
        let (Some(a), Some(b)) = (self.parse(a), self.parse(b)) else {
            return self;
        };

        if a == b {
            self.fail(GraphError::SelfLoop(a));
            return self;
        }

        if weight == 0 {
            self.fail(GraphError::NonPositiveWeight {
                from: a,
                to: b,
                weight: 0,
            });
            return self;
        }

        if let Some(first) = self.adjacency.get(&a).and_then(|n| n.get(&b)).copied()
            && first != weight
        {
            self.fail(GraphError::ConflictingEdge {
                from: a,
                to: b,
                first,
                second: weight,
            });
            return self;
        }

        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        self
    }

    /// Build the graph store, reporting the first problem encountered.
    pub fn build(self) -> Result<GraphStore, GraphError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(GraphStore {
                adjacency: self.adjacency,
            }),
        }
    }

    fn parse(&mut self, name: &str) -> Option<Station> {
        match Station::parse(name) {
            Ok(station) => Some(station),
            Err(err) => {
                self.fail(err.into());
                None
            }
        }
    }

    fn fail(&mut self, err: GraphError) {
        self.error.get_or_insert(err);
    }
}
