//! Station identifier type.

use std::fmt;
use std::sync::Arc;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A named station in the metro network.
///
/// Stations have no structure beyond their name. Equality and ordering are
/// by name, so `"Station A" < "Station B"`; the route finder relies on this
/// ordering to break ties between equally short routes.
///
/// Cloning is cheap: the name is shared behind an `Arc`.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let a = Station::parse("Station A").unwrap();
/// assert_eq!(a.as_str(), "Station A");
///
/// // Empty and padded names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse(" Station A").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name.
    ///
    /// The name must be non-empty and must not start or end with whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.is_empty() {
            return Err(InvalidStation {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStation {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(Station(Arc::from(s)))
    }

    /// Parse a station name, trimming surrounding whitespace first.
    ///
    /// Used for user input (form fields, query strings).
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStation> {
        Self::parse(s.trim())
    }

    /// Returns the station name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({:?})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
