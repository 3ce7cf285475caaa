//! Domain types for the leisure journey planner.
//!
//! These types describe what the planner reasons about: coordinates, the
//! places it may stop at, and the metrics the routing services report.
//! Coordinates enforce their invariants at construction time, so code that
//! receives one can trust it lies on the globe.

mod coordinate;
mod place;
mod route;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use place::{CandidatePlace, Stop};
pub use route::{DistanceEstimate, RouteResult};
