//! Seeding query: the unplanned load closest to the depot.

use crate::error::{Error, Result};
use crate::models::{Load, PlannedSet};

/// Returns the catalog index of the unplanned load whose pickup is closest
/// to the depot.
///
/// Linear scan; on equal distances the first load in catalog order wins.
/// Fails with [`Error::NoCandidate`] when every load is planned.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Coordinate, Load, PlannedSet};
/// use greedy_vrp::distance::nearest_to_depot_unplanned;
///
/// let loads = vec![
///     Load::new(1, Coordinate::new(10.0, 0.0), Coordinate::new(0.0, 0.0)),
///     Load::new(2, Coordinate::new(2.0, 0.0), Coordinate::new(0.0, 0.0)),
/// ];
/// let planned = PlannedSet::new(2);
/// assert_eq!(nearest_to_depot_unplanned(&loads, &planned).unwrap(), 1);
/// ```
pub fn nearest_to_depot_unplanned(loads: &[Load], planned: &PlannedSet) -> Result<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, load) in loads.iter().enumerate() {
        if planned.contains(i) {
            continue;
        }
        let d = load.distance_from_depot();
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i).ok_or(Error::NoCandidate)
}
