//! Map coordinates for drawing the network.

use std::collections::HashMap;
use std::fmt;

use crate::domain::Station;

/// Position of a station on the map canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Point halfway between two positions (rounded towards zero).
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounding box of every station position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }
}

/// Station positions on the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLayout {
    positions: HashMap<Station, Position>,
}

impl MapLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a station, replacing any previous position.
    pub fn place(&mut self, station: Station, position: Position) {
        self.positions.insert(station, position);
    }

    /// Get the position of a station.
    pub fn get(&self, station: &Station) -> Option<Position> {
        self.positions.get(station).copied()
    }

    /// Iterate over all placed stations.
    pub fn iter(&self) -> impl Iterator<Item = (&Station, Position)> + '_ {
        self.positions.iter().map(|(s, p)| (s, *p))
    }

    /// Bounding box of all positions, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.positions.values();
        let first = *positions.next()?;

        Some(positions.fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, p| Bounds {
                min: Position::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Position::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        ))
    }

    /// Returns the number of placed stations.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if no station has been placed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    #[test]
    fn midpoint() {
        let a = Position::new(100, 100);
        let b = Position::new(230, 101);
        assert_eq!(a.midpoint(b), Position::new(165, 100));
    }

    #[test]
    fn place_and_get() {
        let mut layout = MapLayout::new();
        layout.place(station("A"), Position::new(1, 2));

        assert_eq!(layout.get(&station("A")), Some(Position::new(1, 2)));
        assert_eq!(layout.get(&station("B")), None);
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn empty_layout_has_no_bounds() {
        assert!(MapLayout::new().bounds().is_none());
        assert!(MapLayout::new().is_empty());
    }

    #[test]
    fn bounds_cover_all_positions() {
        let mut layout = MapLayout::new();
        layout.place(station("A"), Position::new(100, 630));
        layout.place(station("B"), Position::new(650, 100));
        layout.place(station("C"), Position::new(230, 360));

        let bounds = layout.bounds().unwrap();
        assert_eq!(bounds.min, Position::new(100, 100));
        assert_eq!(bounds.max, Position::new(650, 630));
        assert_eq!(bounds.width(), 550);
        assert_eq!(bounds.height(), 530);
    }
}
