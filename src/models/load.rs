//! Coordinate and load types.

use serde::{Deserialize, Serialize};

/// A point in the plane.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::Coordinate;
///
/// let a = Coordinate::new(0.0, 0.0);
/// let b = Coordinate::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The depot every route starts from and returns to.
pub const DEPOT: Coordinate = Coordinate::new(0.0, 0.0);

/// A transport task: drive to `pickup`, carry the load to `dropoff`.
///
/// The three distances involving the load's own points and the depot are
/// computed once on construction.
///
/// # Examples
///
/// ```
/// use greedy_vrp::models::{Coordinate, Load};
///
/// let load = Load::new(7, Coordinate::new(3.0, 4.0), Coordinate::new(3.0, 0.0));
/// assert_eq!(load.id(), 7);
/// assert!((load.distance_from_depot() - 5.0).abs() < 1e-10);
/// assert!((load.leg_distance() - 4.0).abs() < 1e-10);
/// assert!((load.distance_to_depot() - 3.0).abs() < 1e-10);
/// assert!((load.round_trip() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Load {
    id: u64,
    pickup: Coordinate,
    dropoff: Coordinate,
    leg_distance: f64,
    distance_from_depot: f64,
    distance_to_depot: f64,
}

impl Load {
    /// Creates a load and computes its derived distances.
    pub fn new(id: u64, pickup: Coordinate, dropoff: Coordinate) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            leg_distance: pickup.distance_to(&dropoff),
            distance_from_depot: DEPOT.distance_to(&pickup),
            distance_to_depot: dropoff.distance_to(&DEPOT),
        }
    }

    /// Load ID as given by the input.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Where the load is picked up.
    pub fn pickup(&self) -> Coordinate {
        self.pickup
    }

    /// Where the load is dropped off.
    pub fn dropoff(&self) -> Coordinate {
        self.dropoff
    }

    /// Pickup to dropoff.
    pub fn leg_distance(&self) -> f64 {
        self.leg_distance
    }

    /// Depot to pickup.
    pub fn distance_from_depot(&self) -> f64 {
        self.distance_from_depot
    }

    /// Dropoff back to depot.
    pub fn distance_to_depot(&self) -> f64 {
        self.distance_to_depot
    }

    /// Time of a route that serves only this load.
    pub fn round_trip(&self) -> f64 {
        self.distance_from_depot + self.leg_distance + self.distance_to_depot
    }
}
