//! Budget-constrained journey composition.
//!
//! Builds a leisure journey by repeatedly searching for points of interest
//! around the current position, picking one at random, and keeping it only if
//! the detour still leaves time to reach the end. Each accepted stop becomes
//! the centre of the next search.

use tracing::{debug, info, trace};

use crate::domain::{CandidatePlace, Coordinate, RouteResult, Stop};

use super::budget::JourneyBudget;
use super::config::PlannerConfig;
use super::error::PlanError;
use super::provider::{DistanceEstimator, Geocoder, NearbySearch, RouteComputer};
use super::select::CandidatePicker;

/// Request for a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyRequest {
    /// Where the journey starts (free text).
    pub start: String,

    /// Where the journey ends (free text).
    pub end: String,

    /// Total time to fill, in seconds.
    pub duration_secs: u32,
}

impl JourneyRequest {
    /// Create a new journey request.
    pub fn new(start: impl Into<String>, end: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            duration_secs,
        }
    }

    /// A journey that returns to where it started.
    pub fn round_trip(start: impl Into<String>, duration_secs: u32) -> Self {
        let start = start.into();
        Self {
            end: start.clone(),
            start,
            duration_secs,
        }
    }

    /// Validate the journey request.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.start.trim().is_empty() {
            return Err(PlanError::InvalidRequest(
                "start location is empty".to_string(),
            ));
        }

        if self.end.trim().is_empty() {
            return Err(PlanError::InvalidRequest("end location is empty".to_string()));
        }

        if self.duration_secs == 0 {
            return Err(PlanError::InvalidRequest(
                "duration must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// A composed journey.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedJourney {
    /// The full route through every stop, as computed by the routing service.
    pub route: RouteResult,

    /// Resolved start coordinate.
    pub start: Coordinate,

    /// Resolved end coordinate.
    pub end: Coordinate,

    /// Accepted stops, in visiting order.
    pub stops: Vec<Stop>,

    /// Budget left after travelling to the last stop, in seconds.
    pub remaining_secs: u32,

    /// Number of nearby searches performed.
    pub searches: usize,

    /// Number of candidates drawn from search results.
    pub candidates_evaluated: usize,
}

impl PlannedJourney {
    /// Coordinates of the stops, in visiting order.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        self.stops.iter().map(|s| s.coordinate).collect()
    }
}

/// Outcome of working through one search's candidates.
enum Selection {
    /// A candidate fitted the budget.
    Accepted(Stop),
    /// Candidates were routed, but none fitted.
    Rejected,
    /// No candidate could be geocoded, or every one was already on the journey.
    Unresolved,
}

/// State of one composition in progress.
struct Progress {
    start: Coordinate,
    end: Coordinate,
    current: Coordinate,
    stops: Vec<Stop>,
    budget: JourneyBudget,
    searches: usize,
    candidates_evaluated: usize,
}

impl Progress {
    fn new(start: Coordinate, end: Coordinate, budget_secs: u32) -> Self {
        Self {
            start,
            end,
            current: start,
            stops: Vec::new(),
            budget: JourneyBudget::new(budget_secs),
            searches: 0,
            candidates_evaluated: 0,
        }
    }

    /// Whether a place with this address is already a stop.
    fn has_address(&self, address: &str) -> bool {
        self.stops.iter().any(|s| s.place.address == address)
    }

    /// Whether the coordinate is the start, the current position or a stop.
    fn visits(&self, coordinate: Coordinate) -> bool {
        coordinate == self.current
            || coordinate == self.start
            || self.stops.iter().any(|s| s.coordinate == coordinate)
    }

    /// Travel to an accepted stop.
    fn accept(&mut self, stop: Stop) {
        self.budget.spend(stop.travel_secs);
        self.current = stop.coordinate;
        self.stops.push(stop);
    }
}

/// Journey composer over a set of collaborators.
pub struct JourneyComposer<'a, G, M> {
    geocoder: &'a G,
    maps: &'a M,
    config: &'a PlannerConfig,
}

impl<'a, G, M> JourneyComposer<'a, G, M>
where
    G: Geocoder,
    M: DistanceEstimator + NearbySearch + RouteComputer,
{
    /// Create a new composer.
    pub fn new(geocoder: &'a G, maps: &'a M, config: &'a PlannerConfig) -> Self {
        Self {
            geocoder,
            maps,
            config,
        }
    }

    /// Compose a journey that fills the requested duration.
    ///
    /// Fails with [`PlanError::UnreachableWithinDuration`] before any search
    /// when the direct trip does not fit, and with
    /// [`PlanError::NoNearbyPlacesFound`] when no stop could be added.
    pub async fn plan<R: CandidatePicker>(
        &self,
        request: &JourneyRequest,
        picker: &mut R,
    ) -> Result<PlannedJourney, PlanError> {
        request.validate()?;

        let direct = self
            .maps
            .distance_estimate(&request.start, &request.end)
            .await?;
        debug!(
            origin = %direct.origin,
            destination = %direct.destination,
            direct_secs = direct.duration_seconds,
            budget_secs = request.duration_secs,
            "direct trip estimated"
        );

        if direct.duration_seconds > request.duration_secs {
            return Err(PlanError::UnreachableWithinDuration {
                direct_secs: direct.duration_seconds,
                budget_secs: request.duration_secs,
            });
        }

        // The canonical addresses geocode more reliably than the user's text
        let start = self.geocoder.geocode(&direct.origin).await?;
        let end = self.geocoder.geocode(&direct.destination).await?;

        let mut progress = Progress::new(start, end, request.duration_secs);
        let mut fruitless = 0;
        let cap = self.config.waypoint_cap();

        while !progress.budget.is_exhausted() && progress.stops.len() < cap {
            let radius = self.config.search_radius(progress.budget.remaining());
            let mut candidates = self
                .maps
                .search_nearby(progress.current, radius, &self.config.place_types)
                .await?;
            progress.searches += 1;

            debug!(
                current = %progress.current,
                radius,
                candidates = candidates.len(),
                remaining_secs = progress.budget.remaining(),
                "nearby search"
            );

            if candidates.is_empty() {
                break;
            }

            match self.select(&mut candidates, &mut progress, picker).await? {
                Selection::Accepted(stop) => {
                    info!(
                        stop = stop.place.label(),
                        travel_secs = stop.travel_secs,
                        remaining_secs = progress.budget.remaining().saturating_sub(stop.travel_secs),
                        "added stop"
                    );
                    progress.accept(stop);
                    fruitless = 0;
                }
                Selection::Rejected => {
                    fruitless += 1;
                    debug!(fruitless, "no candidate from this search fits");
                    if fruitless >= self.config.max_fruitless_searches {
                        break;
                    }
                }
                Selection::Unresolved => {
                    debug!("no candidate from this search could be resolved");
                    break;
                }
            }
        }

        if progress.stops.is_empty() {
            return Err(PlanError::NoNearbyPlacesFound);
        }

        let waypoints: Vec<Coordinate> = progress.stops.iter().map(|s| s.coordinate).collect();
        let route = self.maps.compute_route(start, end, &waypoints).await?;

        info!(
            stops = progress.stops.len(),
            searches = progress.searches,
            candidates_evaluated = progress.candidates_evaluated,
            distance_meters = route.distance_meters,
            duration_secs = route.duration_seconds,
            "journey composed"
        );

        Ok(PlannedJourney {
            route,
            start,
            end,
            stops: progress.stops,
            remaining_secs: progress.budget.remaining(),
            searches: progress.searches,
            candidates_evaluated: progress.candidates_evaluated,
        })
    }

    /// Draw candidates from one search result until one fits the budget.
    ///
    /// Every draw removes the candidate, so this ends after at most
    /// `candidates.len()` iterations.
    async fn select<R: CandidatePicker>(
        &self,
        candidates: &mut Vec<CandidatePlace>,
        progress: &mut Progress,
        picker: &mut R,
    ) -> Result<Selection, PlanError> {
        let mut routed = false;

        while let Some(place) = picker.pick(candidates) {
            progress.candidates_evaluated += 1;

            if progress.has_address(&place.address) {
                trace!(address = %place.address, "skipping already visited place");
                continue;
            }

            let coordinate = match self.geocoder.geocode(&place.address).await {
                Ok(c) => c,
                Err(PlanError::LocationNotFound(address)) => {
                    debug!(%address, "discarding candidate that could not be geocoded");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if progress.visits(coordinate) {
                trace!(%coordinate, "skipping candidate already on the journey");
                continue;
            }

            routed = true;
            let to_stop = self
                .maps
                .compute_route(progress.current, coordinate, &[])
                .await?
                .duration_seconds;
            let stop_to_end = self
                .maps
                .compute_route(coordinate, progress.end, &[])
                .await?
                .duration_seconds;

            if progress.budget.can_afford(to_stop, stop_to_end) {
                return Ok(Selection::Accepted(Stop {
                    place,
                    coordinate,
                    travel_secs: to_stop,
                }));
            }

            debug!(
                candidate = place.label(),
                to_stop,
                stop_to_end,
                remaining_secs = progress.budget.remaining(),
                "rejected candidate"
            );
        }

        if routed {
            Ok(Selection::Rejected)
        } else {
            Ok(Selection::Unresolved)
        }
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
