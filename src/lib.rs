//! # greedy-vrp
//!
//! Single-depot load routing: every load has a pickup and a dropoff point,
//! every route starts and ends at the depot `(0,0)` and must fit in a travel
//! time budget. Routes are built greedily by nearest-neighbor chaining.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coordinate, Load, Route, Solution, PlannedSet)
//! - [`catalog`] — Parsing load files into an immutable catalog
//! - [`distance`] — Load-to-load distance index and nearest-load queries
//! - [`constructive`] — Greedy route construction
//! - [`evaluation`] — Route time recomputation and solution checks
//! - [`output`] — Bracketed and JSON rendering of solutions
//! - [`generate`] — Seeded random instances

pub mod catalog;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod models;
pub mod output;

pub use error::{Error, Result};
