//! Domain types for the metro route finder.
//!
//! Types here enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod station;

pub use station::{InvalidStation, Station};
