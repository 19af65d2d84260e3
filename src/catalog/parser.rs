//! Line parser for load records.
//!
//! A record looks like `<id> (<pickupX>,<pickupY>) (<dropoffX>,<dropoffY>)`.
//! Whitespace is allowed around the ID, the parentheses, and the commas.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Coordinate, Load};

// Anchored at both ends: a line with anything before the ID or after the
// dropoff's closing `)` is skipped as a whole, not searched for a record.
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(\d+)\s*\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)\s*\(\s*([^,()\s]+)\s*,\s*([^,()\s]+)\s*\)\s*$",
    )
    .expect("record pattern is valid")
});

/// Parses one record line.
///
/// Returns `None` for anything that is not a well-formed record: wrong
/// shape, an ID that does not fit in `u64`, or a coordinate that is not a
/// finite number.
///
/// # Examples
///
/// ```
/// use greedy_vrp::catalog::parse_record;
///
/// let load = parse_record("3 (-1.5,2) ( 4e1 , 0 )").unwrap();
/// assert_eq!(load.id(), 3);
/// assert_eq!(load.dropoff().x, 40.0);
/// assert!(parse_record("loadNumber pickup dropoff").is_none());
/// ```
pub fn parse_record(line: &str) -> Option<Load> {
    let caps = RECORD.captures(line)?;
    let id = caps[1].parse::<u64>().ok()?;
    let px = parse_coordinate(&caps[2])?;
    let py = parse_coordinate(&caps[3])?;
    let dx = parse_coordinate(&caps[4])?;
    let dy = parse_coordinate(&caps[5])?;
    Some(Load::new(
        id,
        Coordinate::new(px, py),
        Coordinate::new(dx, dy),
    ))
}

fn parse_coordinate(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
