//! Journey planning.
//!
//! Composes a leisure journey that fills a time budget: check the direct trip
//! fits, then repeatedly search around the current position for a point of
//! interest whose detour still leaves time to reach the end. The finished
//! journey is routed once through every accepted stop.

mod budget;
mod compose;
mod config;
mod error;
mod provider;
mod select;

pub use budget::JourneyBudget;
pub use compose::{JourneyComposer, JourneyRequest, PlannedJourney};
pub use config::{DEFAULT_PLACE_TYPE, MAX_WAYPOINTS, PlannerConfig, SEARCH_RADIUS_METERS_PER_SECOND};
pub use error::{PlanError, RequestFailure};
pub use provider::{DistanceEstimator, Geocoder, NearbySearch, RouteComputer};
pub use select::{CandidatePicker, RandomPicker};
