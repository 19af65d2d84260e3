//! Greedy nearest-neighbor route construction under a time budget.
//!
//! Each route is seeded with the unplanned load closest to the depot and then
//! extended with the nearest unplanned neighbor of its last load for as long
//! as the route can still get back to the depot within budget. A seed is
//! never rejected, so a load whose own round trip exceeds the budget ends up
//! alone on its route.
//!
//! # Complexity
//!
//! O(n²) per instance once the distance index exists; each extension query
//! walks a presorted neighbor list.

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::RoutingConfig;
use crate::distance::{nearest_to_depot_unplanned, DistanceIndex};
use crate::error::Result;
use crate::models::{PlannedSet, Route, Solution, Stop};

/// Builds routes from a catalog and a prebuilt distance index.
///
/// The index should be built over the reference points of the configured
/// policy (see [`ConstructionPolicy::reference_points`]).
///
/// [`ConstructionPolicy::reference_points`]: super::ConstructionPolicy::reference_points
///
/// # Examples
///
/// ```
/// use greedy_vrp::catalog::Catalog;
/// use greedy_vrp::config::RoutingConfig;
/// use greedy_vrp::constructive::RouteBuilder;
/// use greedy_vrp::distance::DistanceIndex;
///
/// let catalog = Catalog::parse("1 (1,0) (2,0)\n2 (3,0) (4,0)\n").unwrap();
/// let config = RoutingConfig::default();
/// let index = DistanceIndex::build(catalog.loads(), config.policy().reference_points());
///
/// let solution = RouteBuilder::new(&catalog, &index, config).build().unwrap();
/// assert_eq!(solution.load_ids(), vec![vec![1, 2]]);
/// ```
pub struct RouteBuilder<'a> {
    catalog: &'a Catalog,
    index: &'a DistanceIndex,
    config: RoutingConfig,
}

impl<'a> RouteBuilder<'a> {
    /// Creates a builder over the given catalog and index.
    pub fn new(catalog: &'a Catalog, index: &'a DistanceIndex, config: RoutingConfig) -> Self {
        debug_assert_eq!(index.size(), catalog.len());
        debug_assert_eq!(index.reference(), config.policy().reference_points());
        Self {
            catalog,
            index,
            config,
        }
    }

    /// Drains every load into routes, returned in the order they were closed.
    pub fn build(&self) -> Result<Solution> {
        let mut planned = PlannedSet::new(self.catalog.len());
        let mut solution = Solution::new();

        while !planned.is_complete() {
            let route = self.build_route(&mut planned)?;
            debug!(
                "closed route {} with {} loads, time {:.2}",
                solution.num_routes(),
                route.len(),
                route.total_time()
            );
            solution.add_route(route);
        }

        info!(
            "planned {} loads on {} routes, total time {:.2}",
            solution.num_served(),
            solution.num_routes(),
            solution.total_time()
        );

        Ok(solution)
    }

    fn build_route(&self, planned: &mut PlannedSet) -> Result<Route> {
        let loads = self.catalog.loads();
        let policy = self.config.policy();
        let max_time = self.config.max_route_time();

        let seed = nearest_to_depot_unplanned(loads, planned)?;
        planned.insert(seed);

        let first = &loads[seed];
        let mut route = Route::new();
        route.push_stop(Stop {
            load_id: first.id(),
            catalog_index: seed,
            pickup_time: first.distance_from_depot(),
            dropoff_time: first.distance_from_depot() + first.leg_distance(),
        });

        let mut elapsed = first.distance_from_depot() + first.leg_distance();
        let mut return_leg = first.distance_to_depot();
        let mut current = seed;

        while let Some(next) = self.index.nearest_unplanned(current, planned) {
            let candidate = &loads[next];
            let hop = loads[current].dropoff().distance_to(&candidate.pickup());
            let pickup_time = elapsed + hop;
            let dropoff_time = pickup_time + candidate.leg_distance();
            if !policy.admits(elapsed, dropoff_time, candidate, max_time) {
                break;
            }

            planned.insert(next);
            route.push_stop(Stop {
                load_id: candidate.id(),
                catalog_index: next,
                pickup_time,
                dropoff_time,
            });

            elapsed = dropoff_time;
            return_leg = candidate.distance_to_depot();
            current = next;
        }

        let total = elapsed + return_leg;
        if total > max_time {
            warn!(
                "route starting with load {} takes {:.2}, over the {:.2} budget",
                first.id(),
                total,
                max_time
            );
        }
        route.close(total);

        Ok(route)
    }
}

/// Builds the distance index for the configured policy and runs the builder.
///
/// # Examples
///
/// ```
/// use greedy_vrp::catalog::Catalog;
/// use greedy_vrp::config::RoutingConfig;
/// use greedy_vrp::constructive::nearest_neighbor;
///
/// let catalog = Catalog::parse("1 (0,0) (10,0)").unwrap();
/// let solution = nearest_neighbor(&catalog, &RoutingConfig::default()).unwrap();
/// assert_eq!(solution.load_ids(), vec![vec![1]]);
/// assert!((solution.total_time() - 20.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(catalog: &Catalog, config: &RoutingConfig) -> Result<Solution> {
    let index = DistanceIndex::build(catalog.loads(), config.policy().reference_points());
    RouteBuilder::new(catalog, &index, *config).build()
}
