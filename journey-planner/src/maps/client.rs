//! Google Maps HTTP client.
//!
//! Provides async methods for the Distance Matrix, Places and Routes APIs.
//! Handles authentication, field masks and conversion to domain types.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::domain::{CandidatePlace, Coordinate, DistanceEstimate, RouteResult};

use super::convert::{convert_distance_matrix, convert_places, convert_routes};
use super::error::MapsError;
use super::types::{
    Circle, ComputeRoutesRequest, ComputeRoutesResponse, DistanceMatrixResponse, LatLng,
    LocationRestriction, RouteLocation, RouteModifiers, RouteWaypoint, SearchNearbyRequest,
    SearchNearbyResponse,
};

/// Default URL for the Distance Matrix JSON API.
const DEFAULT_DISTANCE_MATRIX_URL: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Default URL for the Places (New) nearby search.
const DEFAULT_PLACES_URL: &str = "https://places.googleapis.com/v1/places:searchNearby";

/// Default URL for the Routes API.
const DEFAULT_ROUTES_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";

/// Fields requested from the Places API.
const PLACES_FIELD_MASK: &str =
    "places.displayName,places.formattedAddress,places.rating,places.userRatingCount";

/// Fields requested from the Routes API.
const ROUTES_FIELD_MASK: &str =
    "routes.duration,routes.distanceMeters,routes.polyline.encodedPolyline";

/// Header carrying the field mask on Places and Routes requests.
const FIELD_MASK_HEADER: &str = "x-goog-fieldmask";

/// Largest radius the Places API accepts for a circle restriction, in metres.
pub const MAX_SEARCH_RADIUS_METERS: f64 = 50_000.0;

/// Configuration for the Google Maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key, sent as `X-Goog-Api-Key` and as the `key` query parameter
    pub api_key: String,
    /// Distance Matrix endpoint
    pub distance_matrix_url: String,
    /// Places nearby search endpoint
    pub places_url: String,
    /// Routes endpoint
    pub routes_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Language for addresses and route text (BCP-47)
    pub language_code: String,
    /// Toll, highway and ferry avoidance for computed routes
    pub route_modifiers: RouteModifiers,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            distance_matrix_url: DEFAULT_DISTANCE_MATRIX_URL.to_string(),
            places_url: DEFAULT_PLACES_URL.to_string(),
            routes_url: DEFAULT_ROUTES_URL.to_string(),
            timeout_secs: 30,
            language_code: "en-GB".to_string(),
            route_modifiers: RouteModifiers::default(),
        }
    }

    /// Point all three endpoints at one base URL (for testing against a stub server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let base = url.into();
        let base = base.trim_end_matches('/');
        self.distance_matrix_url = format!("{base}/maps/api/distancematrix/json");
        self.places_url = format!("{base}/v1/places:searchNearby");
        self.routes_url = format!("{base}/directions/v2:computeRoutes");
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the response language.
    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.language_code = code.into();
        self
    }

    /// Avoid tolls, highways and ferries as requested.
    pub fn with_avoidances(mut self, tolls: bool, highways: bool, ferries: bool) -> Self {
        self.route_modifiers = RouteModifiers {
            avoid_tolls: tolls,
            avoid_highways: highways,
            avoid_ferries: ferries,
        };
        self
    }
}

/// Google Maps Platform client.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    api_key: String,
    distance_matrix_url: String,
    places_url: String,
    routes_url: String,
    language_code: String,
    route_modifiers: RouteModifiers,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let mut headers = HeaderMap::new();

        // Places and Routes authenticate with this header; Distance Matrix
        // takes the key as a query parameter instead.
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| MapsError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static("x-goog-api-key"), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            distance_matrix_url: config.distance_matrix_url,
            places_url: config.places_url,
            routes_url: config.routes_url,
            language_code: config.language_code,
            route_modifiers: config.route_modifiers,
        })
    }

    /// Get the driving distance and duration between two free-text locations.
    ///
    /// The returned estimate carries the provider's canonical form of both
    /// addresses, which geocode more reliably than the raw input.
    pub async fn distance_estimate(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceEstimate, MapsError> {
        debug!(origin, destination, "requesting distance matrix");

        let response = self
            .http
            .get(&self.distance_matrix_url)
            .query(&[
                ("origins", origin),
                ("destinations", destination),
                ("units", "metric"),
                ("language", self.language_code.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let body = read_body(response).await?;
        let matrix: DistanceMatrixResponse = decode(&body)?;
        convert_distance_matrix(matrix)
    }

    /// Search for places of the given types within a circle.
    ///
    /// Radii above [`MAX_SEARCH_RADIUS_METERS`] are clamped to it, since the
    /// API rejects larger circles outright.
    pub async fn search_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
        included_types: &[String],
    ) -> Result<Vec<CandidatePlace>, MapsError> {
        let radius = radius_meters.clamp(0.0, MAX_SEARCH_RADIUS_METERS);
        debug!(%center, radius, "searching nearby places");

        let request = SearchNearbyRequest {
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: lat_lng(center),
                    radius,
                },
            },
            rank_preference: "DISTANCE",
            included_types,
        };

        let response = self
            .http
            .post(&self.places_url)
            .header(FIELD_MASK_HEADER, PLACES_FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let body = read_body(response).await?;
        let places: SearchNearbyResponse = decode(&body)?;
        convert_places(places)
    }

    /// Compute a driving route from `origin` to `destination` via `intermediates`.
    pub async fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        intermediates: &[Coordinate],
    ) -> Result<RouteResult, MapsError> {
        trace!(
            %origin,
            %destination,
            intermediates = intermediates.len(),
            "computing route"
        );

        let request = ComputeRoutesRequest {
            origin: route_waypoint(origin),
            destination: route_waypoint(destination),
            intermediates: intermediates.iter().copied().map(route_waypoint).collect(),
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_AWARE",
            compute_alternative_routes: false,
            route_modifiers: self.route_modifiers.clone(),
            language_code: self.language_code.clone(),
            units: "METRIC",
        };

        let response = self
            .http
            .post(&self.routes_url)
            .header(FIELD_MASK_HEADER, ROUTES_FIELD_MASK)
            .json(&request)
            .send()
            .await?;

        let body = read_body(response).await?;
        let routes: ComputeRoutesResponse = decode(&body)?;
        convert_routes(routes)
    }
}

/// Read a response body, failing on a non-success status.
async fn read_body(response: reqwest::Response) -> Result<String, MapsError> {
    let status = response.status();
    let body = if status.is_success() {
        response.text().await?
    } else {
        response.text().await.unwrap_or_default()
    };
    check_status(status, body)
}

/// Map an HTTP status to an error, passing the body through on success.
fn check_status(status: reqwest::StatusCode, body: String) -> Result<String, MapsError> {
    if status == reqwest::StatusCode::FORBIDDEN {
        return Err(MapsError::Forbidden);
    }

    if !status.is_success() {
        return Err(MapsError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, MapsError> {
    serde_json::from_str(body).map_err(|e| MapsError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}

fn lat_lng(coordinate: Coordinate) -> LatLng {
    LatLng {
        latitude: coordinate.latitude(),
        longitude: coordinate.longitude(),
    }
}

fn route_waypoint(coordinate: Coordinate) -> RouteWaypoint {
    RouteWaypoint {
        location: RouteLocation {
            lat_lng: lat_lng(coordinate),
        },
    }
}
