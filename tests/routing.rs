use std::path::PathBuf;

use greedy_vrp::catalog::Catalog;
use greedy_vrp::config::RoutingConfig;
use greedy_vrp::constructive::nearest_neighbor;
use greedy_vrp::evaluation::RouteEvaluator;
use greedy_vrp::generate::{format_load, random_loads};
use greedy_vrp::models::Solution;
use greedy_vrp::output::write_plain;
use greedy_vrp::Error;
use proptest::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn plain(solution: &Solution) -> String {
    let mut buf = Vec::new();
    write_plain(&mut buf, solution).expect("write to vec");
    String::from_utf8(buf).expect("utf8")
}

fn solve_file(name: &str) -> (Catalog, Solution) {
    let catalog = Catalog::from_path(fixture(name)).expect("readable fixture");
    let solution = nearest_neighbor(&catalog, &RoutingConfig::default()).expect("solvable");
    (catalog, solution)
}

#[test]
fn test_single_load_file() {
    let (_, solution) = solve_file("single.txt");
    assert_eq!(plain(&solution), "[1]\n");
}

#[test]
fn test_garbage_lines_do_not_change_routes() {
    let (clean_catalog, clean) = solve_file("clean.txt");
    let (mixed_catalog, mixed) = solve_file("mixed.txt");
    assert_eq!(clean_catalog.loads(), mixed_catalog.loads());
    assert_eq!(plain(&clean), plain(&mixed));
}

#[test]
fn test_fixture_solution_is_valid() {
    let (catalog, solution) = solve_file("clean.txt");
    let evaluator = RouteEvaluator::new(&catalog, 720.0);
    let (_, violations) = evaluator.evaluate_solution(&solution);
    assert!(violations.is_empty(), "{violations:?}");
    assert_eq!(solution.num_served(), 10);
}

#[test]
fn test_empty_file() {
    assert!(matches!(
        Catalog::from_path(fixture("empty.txt")),
        Err(Error::EmptyInput)
    ));
    assert!(matches!(
        Catalog::from_path(fixture("no_records.txt")),
        Err(Error::EmptyInput)
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        Catalog::from_path(fixture("does_not_exist.txt")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn test_reparse_is_identical() {
    let a = Catalog::from_path(fixture("clean.txt")).expect("readable fixture");
    let b = Catalog::from_path(fixture("clean.txt")).expect("readable fixture");
    assert_eq!(a.loads(), b.loads());
}

fn instance(count: usize, extent: f64, seed: u64) -> Catalog {
    let text: Vec<String> = random_loads(count, extent, seed)
        .iter()
        .map(format_load)
        .collect();
    Catalog::parse(&text.join("\n")).expect("generated loads parse")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_every_load_served_once(count in 1usize..60, extent in 1.0f64..400.0, seed in any::<u64>()) {
        let catalog = instance(count, extent, seed);
        let solution = nearest_neighbor(&catalog, &RoutingConfig::default()).expect("solvable");

        let mut served: Vec<usize> = solution
            .routes()
            .iter()
            .flat_map(|r| r.catalog_indices())
            .collect();
        served.sort_unstable();
        prop_assert_eq!(served, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn prop_routes_fit_budget(count in 1usize..60, extent in 1.0f64..400.0, seed in any::<u64>(), budget in 50.0f64..1500.0) {
        let catalog = instance(count, extent, seed);
        let config = RoutingConfig::default().with_max_route_time(budget);
        let solution = nearest_neighbor(&catalog, &config).expect("solvable");

        for route in solution.routes() {
            if route.len() > 1 {
                prop_assert!(route.total_time() <= budget);
            } else {
                let load = catalog.get(route.catalog_indices()[0]);
                prop_assert!((route.total_time() - load.round_trip()).abs() < 1e-9);
            }
        }

        let evaluator = RouteEvaluator::new(&catalog, budget);
        let (_, violations) = evaluator.evaluate_solution(&solution);
        prop_assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn prop_deterministic(count in 1usize..40, seed in any::<u64>()) {
        let catalog = instance(count, 300.0, seed);
        let config = RoutingConfig::default();
        let a = nearest_neighbor(&catalog, &config).expect("solvable");
        let b = nearest_neighbor(&catalog, &config).expect("solvable");
        prop_assert_eq!(a.load_ids(), b.load_ids());
    }
}
