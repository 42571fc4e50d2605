//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{InvalidStation, Station};
use crate::planner::Route;

/// Query parameters for a route search.
///
/// Both fields are optional so that the map page can be loaded without a
/// search, and so that a half-filled form can be reported nicely.
#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,
}

/// What a route query asks for, after checking the form rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteInput {
    /// Neither field was supplied (plain page load).
    Absent,

    /// One or both stations were left blank.
    Incomplete,

    /// Origin and destination are the same station.
    SameStation,

    /// A valid pair of distinct stations.
    Stations { from: Station, to: Station },
}

impl RouteQuery {
    /// Interpret the query.
    ///
    /// Station names are only checked for well-formedness here; whether
    /// they exist in the network is up to the route finder.
    pub fn input(&self) -> Result<RouteInput, InvalidStation> {
        let from = self.from.as_deref().map(str::trim);
        let to = self.to.as_deref().map(str::trim);

        match (from, to) {
            (None, None) => Ok(RouteInput::Absent),
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => {
                let from = Station::parse_normalized(from)?;
                let to = Station::parse_normalized(to)?;
                if from == to {
                    Ok(RouteInput::SameStation)
                } else {
                    Ok(RouteInput::Stations { from, to })
                }
            }
            _ => Ok(RouteInput::Incomplete),
        }
    }
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<String>,
}

/// Response to a route search.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RouteResponse {
    /// Whether a route exists
    pub found: bool,

    /// Total distance, if found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,

    /// Stations along the route, if found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl RouteResponse {
    /// Build a response from a search result.
    pub fn from_result(result: Option<&Route>) -> Self {
        match result {
            Some(route) => Self {
                found: true,
                distance: Some(route.distance()),
                path: Some(route.path().iter().map(|s| s.to_string()).collect()),
            },
            None => Self {
                found: false,
                distance: None,
                path: None,
            },
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
