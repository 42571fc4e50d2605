//! The built-in 20-station metro network.

use super::{Network, NetworkError, Position};

/// Adjacency table: each station with its neighbours and connection weights.
const ADJACENCY: &[(&str, &[(&str, i64)])] = &[
    ("Station A", &[("Station B", 4), ("Station D", 7)]),
    ("Station B", &[("Station A", 4), ("Station C", 3), ("Station E", 6)]),
    ("Station C", &[("Station B", 3), ("Station F", 5), ("Station G", 4)]),
    ("Station D", &[("Station A", 7), ("Station E", 2), ("Station H", 5)]),
    (
        "Station E",
        &[("Station B", 6), ("Station D", 2), ("Station F", 4), ("Station I", 6)],
    ),
    ("Station F", &[("Station C", 5), ("Station E", 4), ("Station J", 7)]),
    ("Station G", &[("Station C", 4), ("Station K", 6)]),
    ("Station H", &[("Station D", 5), ("Station I", 3), ("Station L", 4)]),
    (
        "Station I",
        &[("Station E", 6), ("Station H", 3), ("Station J", 5), ("Station M", 6)],
    ),
    ("Station J", &[("Station F", 7), ("Station I", 5), ("Station N", 4)]),
    ("Station K", &[("Station G", 6), ("Station O", 5)]),
    ("Station L", &[("Station H", 4), ("Station P", 6)]),
    ("Station M", &[("Station I", 6), ("Station Q", 5)]),
    ("Station N", &[("Station J", 4), ("Station R", 3)]),
    ("Station O", &[("Station K", 5), ("Station P", 4)]),
    ("Station P", &[("Station L", 6), ("Station O", 4), ("Station Q", 5)]),
    ("Station Q", &[("Station M", 5), ("Station P", 5), ("Station R", 6)]),
    ("Station R", &[("Station N", 3), ("Station Q", 6), ("Station S", 4)]),
    ("Station S", &[("Station R", 4), ("Station T", 5)]),
    ("Station T", &[("Station S", 5)]),
];

/// Map coordinates of each station.
const POSITIONS: &[(&str, Position)] = &[
    ("Station A", Position::new(100, 100)),
    ("Station B", Position::new(230, 100)),
    ("Station C", Position::new(360, 100)),
    ("Station D", Position::new(100, 230)),
    ("Station E", Position::new(230, 230)),
    ("Station F", Position::new(360, 230)),
    ("Station G", Position::new(500, 100)),
    ("Station H", Position::new(100, 360)),
    ("Station I", Position::new(230, 360)),
    ("Station J", Position::new(360, 360)),
    ("Station K", Position::new(500, 230)),
    ("Station L", Position::new(100, 500)),
    ("Station M", Position::new(230, 500)),
    ("Station N", Position::new(360, 500)),
    ("Station O", Position::new(500, 360)),
    ("Station P", Position::new(100, 630)),
    ("Station Q", Position::new(230, 630)),
    ("Station R", Position::new(360, 630)),
    ("Station S", Position::new(500, 500)),
    ("Station T", Position::new(650, 500)),
];

/// Build the built-in metro network.
pub(super) fn metro() -> Result<Network, NetworkError> {
    Network::from_parts(
        ADJACENCY
            .iter()
            .map(|(name, neighbours)| (*name, neighbours.iter().copied())),
        POSITIONS.iter().copied(),
    )
}
