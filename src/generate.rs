//! Seeded random instances in the load file format.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Coordinate, Load};

/// Generates `count` loads with IDs `1..=count` and coordinates drawn
/// uniformly from `[-extent, extent]` on both axes.
///
/// The same seed always yields the same loads.
///
/// # Panics
///
/// Panics if `extent` is not finite.
///
/// # Examples
///
/// ```
/// use greedy_vrp::generate::random_loads;
///
/// let loads = random_loads(5, 100.0, 42);
/// assert_eq!(loads.len(), 5);
/// assert_eq!(loads[4].id(), 5);
/// assert_eq!(loads, random_loads(5, 100.0, 42));
/// ```
pub fn random_loads(count: usize, extent: f64, seed: u64) -> Vec<Load> {
    let extent = extent.abs();
    let mut rng = StdRng::seed_from_u64(seed);
    let point = |rng: &mut StdRng| {
        Coordinate::new(
            rng.random_range(-extent..=extent),
            rng.random_range(-extent..=extent),
        )
    };

    (1..=count as u64)
        .map(|id| {
            let pickup = point(&mut rng);
            let dropoff = point(&mut rng);
            Load::new(id, pickup, dropoff)
        })
        .collect()
}

/// Formats a load as one input line, `<id> (<x>,<y>) (<x>,<y>)`.
///
/// Coordinates are written with enough digits to parse back to the same value.
pub fn format_load(load: &Load) -> String {
    let p = load.pickup();
    let d = load.dropoff();
    format!("{} ({},{}) ({},{})", load.id(), p.x, p.y, d.x, d.y)
}
