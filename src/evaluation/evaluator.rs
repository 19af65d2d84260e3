//! Route evaluator that recomputes travel time and checks coverage.

use crate::catalog::Catalog;
use crate::models::{PlannedSet, Route, Solution, Stop, Violation, ViolationType, DEPOT};

const TIME_TOLERANCE: f64 = 1e-9;

/// Re-derives route timing from coordinates and checks a solution against
/// the time budget and the one-route-per-load rule.
///
/// A route holding a single load is allowed to exceed the budget: nothing
/// smaller can be built for that load.
///
/// # Examples
///
/// ```
/// use greedy_vrp::catalog::Catalog;
/// use greedy_vrp::evaluation::RouteEvaluator;
///
/// let catalog = Catalog::parse("1 (3,4) (3,0)\n2 (6,8) (0,8)").unwrap();
/// let evaluator = RouteEvaluator::new(&catalog, 720.0);
///
/// let (route, violations) = evaluator.build_route(&[0, 1]);
/// assert_eq!(route.load_ids(), vec![1, 2]);
/// assert!(violations.is_empty());
/// ```
pub struct RouteEvaluator<'a> {
    catalog: &'a Catalog,
    max_route_time: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given catalog and budget.
    pub fn new(catalog: &'a Catalog, max_route_time: f64) -> Self {
        Self {
            catalog,
            max_route_time,
        }
    }

    /// Builds a route from a sequence of catalog indices, computing stop times
    /// and the depot-to-depot total.
    ///
    /// Returns the route and any budget or lookup violations found.
    pub fn build_route(&self, catalog_indices: &[usize]) -> (Route, Vec<Violation>) {
        let mut route = Route::new();
        let mut violations = Vec::new();
        let mut time = 0.0;
        let mut position = DEPOT;

        for &idx in catalog_indices {
            let Some(load) = self.catalog.loads().get(idx) else {
                violations.push(Violation::new(ViolationType::UnknownLoad {
                    route_index: 0,
                    catalog_index: idx,
                }));
                continue;
            };

            let pickup_time = time + position.distance_to(&load.pickup());
            let dropoff_time = pickup_time + load.leg_distance();
            route.push_stop(Stop {
                load_id: load.id(),
                catalog_index: idx,
                pickup_time,
                dropoff_time,
            });

            time = dropoff_time;
            position = load.dropoff();
        }

        // Return to depot
        if !route.is_empty() {
            time += position.distance_to(&DEPOT);
        }
        route.close(time);

        if route.len() > 1 && time > self.max_route_time {
            violations.push(Violation::new(ViolationType::RouteTimeExceeded {
                route_index: 0,
                time,
                max_time: self.max_route_time,
            }));
        }

        (route, violations)
    }

    /// Evaluates an entire solution, returning the recomputed total time and
    /// every violation found.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        let mut total_time = 0.0;
        let mut all_violations = Vec::new();
        let mut seen = PlannedSet::new(self.catalog.len());

        for (idx, route) in solution.routes().iter().enumerate() {
            let catalog_indices = route.catalog_indices();
            let (rebuilt, mut violations) = self.build_route(&catalog_indices);

            // Adjust route_index in violations
            for v in &mut violations {
                match &mut v.kind {
                    ViolationType::RouteTimeExceeded { route_index, .. }
                    | ViolationType::UnknownLoad { route_index, .. } => {
                        *route_index = idx;
                    }
                    _ => {}
                }
            }

            if (rebuilt.total_time() - route.total_time()).abs() > TIME_TOLERANCE {
                violations.push(Violation::new(ViolationType::RouteTimeMismatch {
                    route_index: idx,
                    recorded: route.total_time(),
                    recomputed: rebuilt.total_time(),
                }));
            }

            for &ci in &catalog_indices {
                if ci < self.catalog.len() && !seen.insert(ci) {
                    violations.push(Violation::new(ViolationType::LoadDuplicated {
                        catalog_index: ci,
                    }));
                }
            }

            total_time += rebuilt.total_time();
            all_violations.append(&mut violations);
        }

        for ci in 0..self.catalog.len() {
            if !seen.contains(ci) {
                all_violations.push(Violation::new(ViolationType::LoadMissing {
                    catalog_index: ci,
                }));
            }
        }

        (total_time, all_violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoutingConfig;
    use crate::constructive::{nearest_neighbor, ConstructionPolicy};

    fn setup() -> Catalog {
        Catalog::parse("1 (3,4) (3,0)\n2 (6,8) (0,8)\n3 (0,10) (0,20)").expect("valid")
    }

    fn route_of(catalog: &Catalog, indices: &[usize], total_time: f64) -> Route {
        let mut route = Route::new();
        for &i in indices {
            route.push_stop(Stop {
                load_id: catalog.get(i).id(),
                catalog_index: i,
                pickup_time: 0.0,
                dropoff_time: 0.0,
            });
        }
        route.close(total_time);
        route
    }

    #[test]
    fn test_build_route_empty() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let (route, violations) = eval.build_route(&[]);
        assert!(route.is_empty());
        assert!(violations.is_empty());
        assert_eq!(route.total_time(), 0.0);
    }

    #[test]
    fn test_build_route_single() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let (route, violations) = eval.build_route(&[0]);
        assert!(violations.is_empty());
        // depot->pickup 5, leg 4, dropoff->depot 3
        assert!((route.total_time() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_timing_chain() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let (route, _) = eval.build_route(&[0, 1]);
        let s1 = &route.stops()[0];
        let s2 = &route.stops()[1];
        // (3,0) -> (6,8)
        let expected_pickup_2 = s1.dropoff_time + (9.0f64 + 64.0).sqrt();
        assert!((s2.pickup_time - expected_pickup_2).abs() < 1e-10);
        assert!((s2.dropoff_time - (s2.pickup_time + 6.0)).abs() < 1e-10);
        assert!((route.total_time() - (s2.dropoff_time + 8.0)).abs() < 1e-10);
    }

    #[test]
    fn test_build_route_over_budget() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 20.0);
        let (_, violations) = eval.build_route(&[0, 2]);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::RouteTimeExceeded { .. }
        ));
    }

    #[test]
    fn test_budget_check_is_exact() {
        let catalog = setup();
        let (route, _) = RouteEvaluator::new(&catalog, 720.0).build_route(&[0, 1]);
        let time = route.total_time();

        let (_, at_budget) = RouteEvaluator::new(&catalog, time).build_route(&[0, 1]);
        assert!(at_budget.is_empty());

        let just_under = time - time * f64::EPSILON;
        let (_, over) = RouteEvaluator::new(&catalog, just_under).build_route(&[0, 1]);
        assert_eq!(over.len(), 1);
    }

    #[test]
    fn test_single_load_overrun_allowed() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 5.0);
        let (_, violations) = eval.build_route(&[2]);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_build_route_unknown_index() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let (route, violations) = eval.build_route(&[0, 9]);
        assert_eq!(route.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::UnknownLoad { catalog_index: 9, .. }
        ));
    }

    #[test]
    fn test_evaluate_constructed_solution() {
        let catalog = setup();
        let sol = nearest_neighbor(&catalog, &RoutingConfig::default()).expect("solvable");
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let (total, violations) = eval.evaluate_solution(&sol);
        assert!(violations.is_empty(), "{violations:?}");
        assert!((total - sol.total_time()).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_missing_and_duplicated() {
        let catalog = setup();
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let mut sol = Solution::new();
        sol.add_route(route_of(&catalog, &[0], 12.0));
        let (twice, _) = eval.build_route(&[0, 1]);
        sol.add_route(route_of(&catalog, &[0, 1], twice.total_time()));
        let (_, violations) = eval.evaluate_solution(&sol);
        assert!(violations.contains(&Violation::new(ViolationType::LoadDuplicated {
            catalog_index: 0
        })));
        assert!(violations.contains(&Violation::new(ViolationType::LoadMissing {
            catalog_index: 2
        })));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_evaluate_time_mismatch() {
        let catalog = Catalog::parse("1 (0,0) (10,0)").expect("valid");
        let eval = RouteEvaluator::new(&catalog, 720.0);
        let mut sol = Solution::new();
        sol.add_route(route_of(&catalog, &[0], 15.0));
        let (total, violations) = eval.evaluate_solution(&sol);
        assert!((total - 20.0).abs() < 1e-10);
        assert!(matches!(
            violations[0].kind,
            ViolationType::RouteTimeMismatch { route_index: 0, .. }
        ));
    }

    #[test]
    fn test_evaluate_reports_proximity_overrun() {
        let catalog = Catalog::parse("1 (1,0) (40,0)\n2 (2,0) (2,0)").expect("valid");
        let config = RoutingConfig::default()
            .with_max_route_time(70.0)
            .with_policy(ConstructionPolicy::PickupProximity);
        let sol = nearest_neighbor(&catalog, &config).expect("solvable");
        let eval = RouteEvaluator::new(&catalog, config.max_route_time());
        let (_, violations) = eval.evaluate_solution(&sol);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::RouteTimeExceeded { route_index: 0, .. }
        ));
    }
}
