//! Neighbor selection and admission policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::ReferencePoints;
use crate::models::Load;

/// How the route builder picks the next load and decides whether it fits.
///
/// Both policies seed each route with the unplanned load closest to the
/// depot; they differ once a route is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionPolicy {
    /// Next load is the one whose pickup is closest to the current dropoff.
    /// It is admitted only if the route can still return to the depot in
    /// budget after serving it, counting the connecting hop.
    #[default]
    Chained,
    /// Next load is the one whose pickup is closest to the current pickup.
    /// Admission counts only the candidate's own leg and its return to the
    /// depot, not the hop to reach it, so routes may overrun the budget.
    PickupProximity,
}

impl ConstructionPolicy {
    /// Points the distance index must be built over for this policy.
    pub fn reference_points(self) -> ReferencePoints {
        match self {
            Self::Chained => ReferencePoints::DropoffToPickup,
            Self::PickupProximity => ReferencePoints::PickupToPickup,
        }
    }

    /// Returns `true` if `candidate` may be appended to a route that has
    /// used `elapsed` time and would reach the candidate's dropoff at
    /// `dropoff_time`.
    ///
    /// `dropoff_time` must be the same value the route goes on to record, so
    /// an admitted route closes within budget bit for bit.
    pub fn admits(
        self,
        elapsed: f64,
        dropoff_time: f64,
        candidate: &Load,
        max_route_time: f64,
    ) -> bool {
        let cost = match self {
            Self::Chained => dropoff_time + candidate.distance_to_depot(),
            Self::PickupProximity => {
                elapsed + candidate.leg_distance() + candidate.distance_to_depot()
            }
        };
        cost <= max_route_time
    }
}

impl fmt::Display for ConstructionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chained => f.write_str("chained"),
            Self::PickupProximity => f.write_str("pickup-proximity"),
        }
    }
}

impl FromStr for ConstructionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chained" => Ok(Self::Chained),
            "pickup-proximity" => Ok(Self::PickupProximity),
            other => Err(format!(
                "unknown policy '{other}', expected 'chained' or 'pickup-proximity'"
            )),
        }
    }
}
