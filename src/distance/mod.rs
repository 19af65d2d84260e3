//! Distance index and nearest-load queries.
//!
//! Provides a dense load-to-load matrix sized to the instance, plus the two
//! queries route construction relies on: nearest unplanned neighbor of a
//! load, and nearest unplanned load to the depot.

mod depot;
mod index;

pub use depot::nearest_to_depot_unplanned;
pub use index::{nearest_in_row, DistanceIndex, ReferencePoints};
