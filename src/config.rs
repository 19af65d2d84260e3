//! Routing configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::ConstructionPolicy;

/// Default time budget for a single route (one unit of distance = one unit of time).
pub const DEFAULT_MAX_ROUTE_TIME: f64 = 720.0;

/// Parameters for route construction.
///
/// # Examples
///
/// ```
/// use greedy_vrp::config::RoutingConfig;
/// use greedy_vrp::constructive::ConstructionPolicy;
///
/// let config = RoutingConfig::default().with_max_route_time(480.0);
/// assert_eq!(config.max_route_time(), 480.0);
/// assert_eq!(config.policy(), ConstructionPolicy::Chained);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    max_route_time: f64,
    policy: ConstructionPolicy,
}

impl RoutingConfig {
    /// Sets the per-route time budget.
    pub fn with_max_route_time(mut self, max: f64) -> Self {
        self.max_route_time = max;
        self
    }

    /// Sets the construction policy.
    pub fn with_policy(mut self, policy: ConstructionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Maximum travel time of a route, depot to depot.
    pub fn max_route_time(&self) -> f64 {
        self.max_route_time
    }

    /// Policy used to pick and admit loads.
    pub fn policy(&self) -> ConstructionPolicy {
        self.policy
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            max_route_time: DEFAULT_MAX_ROUTE_TIME,
            policy: ConstructionPolicy::default(),
        }
    }
}
