//! Web layer for the metro route finder.
//!
//! Serves the map page and a small JSON API over the route planner.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
