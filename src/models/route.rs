//! Route and stop types.

use serde::Serialize;

/// One load served within a route.
///
/// Times are measured from the moment the driver leaves the depot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// Load ID as given by the input.
    pub load_id: u64,
    /// Position of the load in the catalog.
    pub catalog_index: usize,
    /// Arrival time at the pickup point.
    pub pickup_time: f64,
    /// Arrival time at the dropoff point.
    pub dropoff_time: f64,
}

/// An ordered sequence of loads served by one driver.
///
/// The route starts and ends at the depot; neither leg is stored as a stop.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Route, Stop};
///
/// let mut route = Route::new();
/// route.push_stop(Stop {
///     load_id: 3,
///     catalog_index: 0,
///     pickup_time: 5.0,
///     dropoff_time: 9.0,
/// });
/// route.close(12.0);
/// assert_eq!(route.load_ids(), vec![3]);
/// assert_eq!(route.total_time(), 12.0);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Route {
    stops: Vec<Stop>,
    total_time: f64,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stop to the end of this route.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Records the depot-to-depot travel time once the route is finished.
    pub fn close(&mut self, total_time: f64) {
        self.total_time = total_time;
    }

    /// Returns the ordered stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route serves no loads.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Load IDs in visiting order.
    pub fn load_ids(&self) -> Vec<u64> {
        self.stops.iter().map(|s| s.load_id).collect()
    }

    /// Catalog positions in visiting order.
    pub fn catalog_indices(&self) -> Vec<usize> {
        self.stops.iter().map(|s| s.catalog_index).collect()
    }

    /// Depot-to-depot travel time recorded on close.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}
