//! Metro network definition.
//!
//! A [`Network`] pairs the station graph with the map layout used to draw
//! it. The built-in network is the 20-station metro; alternative networks
//! can be loaded from JSON files.

mod file;
mod layout;
mod metro;

use std::path::PathBuf;

use crate::domain::Station;
use crate::graph::{GraphError, GraphStore};

pub use file::{Entries, NetworkFile};
pub use layout::{Bounds, MapLayout, Position};

/// Errors that can occur while loading a network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Failed to read the network file
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Network file is not valid JSON for a network
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),

    /// The graph itself is malformed
    #[error("invalid network: {0}")]
    Graph(#[from] GraphError),

    /// A station has no map position
    #[error("station {0} has no map position")]
    MissingPosition(Station),

    /// A station is placed twice at different positions
    #[error("station {station} placed at both {first} and {second}")]
    ConflictingPosition {
        station: Station,
        first: Position,
        second: Position,
    },

    /// A map position names a station that is not in the graph
    #[error("map position given for unknown station {0}")]
    UnknownPosition(Station),
}

/// A station graph together with its map layout.
///
/// Every station in the graph has a position, and every position belongs to
/// a station in the graph.
#[derive(Debug, Clone)]
pub struct Network {
    graph: GraphStore,
    layout: MapLayout,
}

impl Network {
    /// The built-in 20-station metro network.
    pub fn metro() -> Result<Self, NetworkError> {
        metro::metro()
    }

    /// Load a network from a JSON file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NetworkError> {
        NetworkFile::read(path)?.into_network()
    }

    /// Build a network from an adjacency table and station positions.
    ///
    /// See [`GraphStore::from_adjacency`] for the adjacency table format.
    pub fn from_parts<I, N, S, P>(adjacency: I, positions: P) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
        P: IntoIterator<Item = (S, Position)>,
    {
        let graph = GraphStore::from_adjacency(adjacency)?;

        let mut layout = MapLayout::new();
        for (name, position) in positions {
            let station = Station::parse(name.as_ref()).map_err(GraphError::from)?;
            if !graph.contains(&station) {
                return Err(NetworkError::UnknownPosition(station));
            }
            if let Some(first) = layout.get(&station)
                && first != position
            {
                return Err(NetworkError::ConflictingPosition {
                    station,
                    first,
                    second: position,
                });
            }
            layout.place(station, position);
        }

        if let Some(missing) = graph
            .stations()
            .into_iter()
            .find(|s| layout.get(s).is_none())
        {
            return Err(NetworkError::MissingPosition(missing));
        }

        Ok(Self { graph, layout })
    }

    /// The station graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The map layout.
    pub fn layout(&self) -> &MapLayout {
        &self.layout
    }
}
