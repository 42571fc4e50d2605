//! JSON network files.
//!
//! ```json
//! {
//!   "adjacency": {
//!     "Station A": { "Station B": 4 },
//!     "Station B": { "Station A": 4 }
//!   },
//!   "positions": {
//!     "Station A": [100, 100],
//!     "Station B": [230, 100]
//!   }
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use super::{Network, NetworkError, Position};

/// On-disk representation of a network.
///
/// Weights are signed so that zero and negative values in a hand-edited
/// file are reported by validation rather than rejected by the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkFile {
    pub adjacency: Entries<Entries<i64>>,
    pub positions: Entries<(i32, i32)>,
}

/// A JSON object read as its entries, in file order.
///
/// Repeated keys are kept, so that validation sees every entry instead of
/// only the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<V>(pub Vec<(String, V)>);

impl<V> IntoIterator for Entries<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object keyed by station name")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Entries<V>, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

impl NetworkFile {
    /// Read and parse a network file.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self, NetworkError> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|source| NetworkError::Io { path, source })?;
        Self::parse(&contents)
    }

    /// Parse a network from a JSON string.
    pub fn parse(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the file contents and build the network.
    pub fn into_network(self) -> Result<Network, NetworkError> {
        Network::from_parts(
            self.adjacency,
            self.positions
                .into_iter()
                .map(|(name, (x, y))| (name, Position::new(x, y))),
        )
    }
}
