//! Domain model types for load routing.
//!
//! Provides the core abstractions: coordinates and loads with precomputed
//! depot distances, routes as ordered sequences of stops, the planned-set
//! used during construction, and solutions with their violations.

mod load;
mod planned;
mod route;
mod solution;

pub use load::{Coordinate, Load, DEPOT};
pub use planned::PlannedSet;
pub use route::{Route, Stop};
pub use solution::{Solution, Violation, ViolationType};
