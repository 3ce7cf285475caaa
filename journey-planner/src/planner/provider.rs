//! Collaborator seams used by the composer.
//!
//! Each external service is a trait so the composer can be driven by the
//! HTTP clients in production and by scripted stubs in tests.

use crate::domain::{CandidatePlace, Coordinate, DistanceEstimate, RouteResult};
use crate::geocode::NominatimClient;
use crate::maps::GoogleMapsClient;

use super::error::PlanError;

/// Resolves free-text locations to coordinates.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// Resolve a location, failing with [`PlanError::LocationNotFound`] when
    /// there is no match.
    async fn geocode(&self, location: &str) -> Result<Coordinate, PlanError>;
}

/// Estimates the direct trip between two free-text locations.
#[allow(async_fn_in_trait)]
pub trait DistanceEstimator {
    async fn distance_estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceEstimate, PlanError>;
}

/// Finds points of interest around a coordinate.
#[allow(async_fn_in_trait)]
pub trait NearbySearch {
    /// Return candidates within `radius_meters` of `center` whose type is one
    /// of `place_types`. The order of the result carries no meaning.
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
        place_types: &[String],
    ) -> Result<Vec<CandidatePlace>, PlanError>;
}

/// Computes routes through ordered coordinates.
#[allow(async_fn_in_trait)]
pub trait RouteComputer {
    async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        intermediates: &[Coordinate],
    ) -> Result<RouteResult, PlanError>;
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, location: &str) -> Result<Coordinate, PlanError> {
        Ok(NominatimClient::geocode(self, location).await?)
    }
}

impl DistanceEstimator for GoogleMapsClient {
    async fn distance_estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceEstimate, PlanError> {
        Ok(GoogleMapsClient::distance_estimate(self, origin, destination).await?)
    }
}

impl NearbySearch for GoogleMapsClient {
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
        place_types: &[String],
    ) -> Result<Vec<CandidatePlace>, PlanError> {
        Ok(GoogleMapsClient::search_nearby(self, center, radius_meters, place_types).await?)
    }
}

impl RouteComputer for GoogleMapsClient {
    async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        intermediates: &[Coordinate],
    ) -> Result<RouteResult, PlanError> {
        Ok(GoogleMapsClient::compute_route(self, origin, destination, intermediates).await?)
    }
}
