//! Rendering solutions for standard output.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::{Route, Solution};

/// Formats a route as its bracketed, comma-separated load IDs.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Route, Stop};
/// use greedy_vrp::output::format_route;
///
/// let mut route = Route::new();
/// for (i, id) in [4, 1, 9].into_iter().enumerate() {
///     route.push_stop(Stop { load_id: id, catalog_index: i, pickup_time: 0.0, dropoff_time: 0.0 });
/// }
/// assert_eq!(format_route(&route), "[4,1,9]");
/// ```
pub fn format_route(route: &Route) -> String {
    let ids: Vec<String> = route.load_ids().iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(","))
}

/// Writes one bracketed line per route, in closing order.
pub fn write_plain<W: Write>(mut writer: W, solution: &Solution) -> io::Result<()> {
    for route in solution.routes() {
        writeln!(writer, "{}", format_route(route))?;
    }
    writer.flush()
}

#[derive(Serialize)]
struct JsonRoute {
    loads: Vec<u64>,
    time: f64,
}

#[derive(Serialize)]
struct JsonSolution {
    routes: Vec<JsonRoute>,
    total_time: f64,
}

/// Renders the solution as a JSON document with per-route load IDs and times.
pub fn to_json(solution: &Solution) -> serde_json::Result<String> {
    let doc = JsonSolution {
        routes: solution
            .routes()
            .iter()
            .map(|r| JsonRoute {
                loads: r.load_ids(),
                time: r.total_time(),
            })
            .collect(),
        total_time: solution.total_time(),
    };
    serde_json::to_string(&doc)
}
