//! Constructive heuristics for building routes from a load catalog.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor chaining under a route time budget, O(n²)
//! - [`ConstructionPolicy`] — Neighbor selection and admission rule used by the builder

mod nearest_neighbor;
mod policy;

pub use nearest_neighbor::{nearest_neighbor, RouteBuilder};
pub use policy::ConstructionPolicy;
