//! Planner configuration.

/// Hard ceiling on intermediate stops per journey.
///
/// Routes requests with more intermediate waypoints than this are billed at
/// a higher tier.
pub const MAX_WAYPOINTS: usize = 8;

/// Nearby search radius per second of remaining budget, in metres.
///
/// 12.5 m/s is 45 km/h, just under 30 mph: a rough average road speed.
pub const SEARCH_RADIUS_METERS_PER_SECOND: f64 = 12.5;

/// Place type searched for when none is configured.
pub const DEFAULT_PLACE_TYPE: &str = "tourist_attraction";

/// Configuration parameters for journey composition.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Metres of search radius per second of remaining budget.
    pub radius_meters_per_second: f64,

    /// Maximum number of intermediate stops.
    /// Values above [`MAX_WAYPOINTS`] are clamped to it.
    pub max_waypoints: usize,

    /// Place types passed to the nearby search.
    pub place_types: Vec<String>,

    /// Consecutive searches that may end without an accepted stop
    /// before composition gives up.
    pub max_fruitless_searches: usize,
}

impl PlannerConfig {
    /// Set the place types to search for.
    pub fn with_place_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.place_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum number of intermediate stops (clamped to [`MAX_WAYPOINTS`]).
    pub fn with_max_waypoints(mut self, n: usize) -> Self {
        self.max_waypoints = n;
        self
    }

    /// Set the search radius factor.
    pub fn with_radius_factor(mut self, meters_per_second: f64) -> Self {
        self.radius_meters_per_second = meters_per_second;
        self
    }

    /// Set how many fruitless searches in a row end composition.
    pub fn with_max_fruitless_searches(mut self, n: usize) -> Self {
        self.max_fruitless_searches = n;
        self
    }

    /// The effective stop limit.
    pub fn waypoint_cap(&self) -> usize {
        self.max_waypoints.min(MAX_WAYPOINTS)
    }

    /// Nearby search radius for the given remaining budget, in metres.
    pub fn search_radius(&self, remaining_secs: u32) -> f64 {
        f64::from(remaining_secs) * self.radius_meters_per_second
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            radius_meters_per_second: SEARCH_RADIUS_METERS_PER_SECOND,
            max_waypoints: MAX_WAYPOINTS,
            place_types: vec![DEFAULT_PLACE_TYPE.to_string()],
            max_fruitless_searches: 2,
        }
    }
}
