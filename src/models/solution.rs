//! Solution and violation types.

use serde::Serialize;

use super::Route;

/// A rule broken by a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route travel time exceeds the budget.
    RouteTimeExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Recomputed travel time.
        time: f64,
        /// Allowed travel time.
        max_time: f64,
    },
    /// Route time stored at close differs from the recomputed time.
    RouteTimeMismatch {
        /// Route index in the solution.
        route_index: usize,
        /// Time recorded on the route.
        recorded: f64,
        /// Time recomputed from coordinates.
        recomputed: f64,
    },
    /// A load does not appear on any route.
    LoadMissing {
        /// Catalog position of the load.
        catalog_index: usize,
    },
    /// A load appears more than once.
    LoadDuplicated {
        /// Catalog position of the load.
        catalog_index: usize,
    },
    /// A stop refers to a catalog position that does not exist.
    UnknownLoad {
        /// Route index in the solution.
        route_index: usize,
        /// Offending catalog position.
        catalog_index: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Routes in the order they were closed.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new());
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 0);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a closed route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in closing order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes, i.e. drivers needed.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Sum of route travel times.
    pub fn total_time(&self) -> f64 {
        self.routes.iter().map(|r| r.total_time()).sum()
    }

    /// Load IDs of every route, in order.
    pub fn load_ids(&self) -> Vec<Vec<u64>> {
        self.routes.iter().map(|r| r.load_ids()).collect()
    }
}
