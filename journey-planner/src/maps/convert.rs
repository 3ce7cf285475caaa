//! Conversion from Google Maps DTOs to domain types.
//!
//! Each converter validates the semantic content of a response that already
//! arrived with a success status, turning provider quirks (status fields,
//! omitted zero values, suffixed durations) into plain domain values.

use tracing::debug;

use crate::domain::{CandidatePlace, DistanceEstimate, RouteResult};

use super::error::MapsError;
use super::types::{
    ComputeRoutesResponse, DistanceMatrixResponse, PlaceDto, SearchNearbyResponse,
};

/// Parse a protobuf-style duration such as `"165s"` into whole seconds.
///
/// Fractional seconds are rounded to the nearest second.
///
/// # Examples
///
/// ```
/// use journey_planner::maps::parse_duration_secs;
///
/// assert_eq!(parse_duration_secs("165s"), Some(165));
/// assert_eq!(parse_duration_secs("0s"), Some(0));
/// assert_eq!(parse_duration_secs("12.6s"), Some(13));
/// assert_eq!(parse_duration_secs("165"), None);
/// ```
pub fn parse_duration_secs(s: &str) -> Option<u32> {
    let digits = s.trim().strip_suffix('s')?;
    if let Ok(secs) = digits.parse::<u32>() {
        return Some(secs);
    }

    let secs = digits.parse::<f64>().ok()?;
    if !secs.is_finite() || secs < 0.0 || secs > f64::from(u32::MAX) {
        return None;
    }
    Some(secs.round() as u32)
}

/// Convert a Distance Matrix response for a single origin/destination pair.
pub fn convert_distance_matrix(
    response: DistanceMatrixResponse,
) -> Result<DistanceEstimate, MapsError> {
    if response.status != "OK" {
        if let Some(message) = &response.error_message {
            debug!(status = %response.status, %message, "distance matrix rejected request");
        }
        return Err(MapsError::Status {
            status: response.status,
        });
    }

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or_else(|| MapsError::Response("distance matrix returned no elements".to_string()))?;

    if element.status != "OK" {
        return Err(MapsError::Status {
            status: element.status,
        });
    }

    let origin = response
        .origin_addresses
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::Response("missing origin address".to_string()))?;
    let destination = response
        .destination_addresses
        .into_iter()
        .next()
        .ok_or_else(|| MapsError::Response("missing destination address".to_string()))?;

    let distance = element
        .distance
        .ok_or_else(|| MapsError::Response("element has no distance".to_string()))?;
    let duration = element
        .duration
        .ok_or_else(|| MapsError::Response("element has no duration".to_string()))?;

    Ok(DistanceEstimate {
        origin,
        destination,
        distance_meters: saturate(distance.value),
        duration_seconds: saturate(duration.value),
    })
}

/// Convert a nearby search response into candidate places.
///
/// Places without a formatted address cannot be geocoded and are dropped.
pub fn convert_places(response: SearchNearbyResponse) -> Result<Vec<CandidatePlace>, MapsError> {
    // The API may answer a search with no matches as `{}`. That is reported
    // as an error too, so a barren area aborts the plan instead of ending it.
    let places = response
        .places
        .ok_or_else(|| MapsError::Response("nearby search returned no places field".to_string()))?;

    let total = places.len();
    let candidates: Vec<CandidatePlace> = places.into_iter().filter_map(convert_place).collect();

    if candidates.len() < total {
        debug!(
            dropped = total - candidates.len(),
            "skipped places without a formatted address"
        );
    }

    Ok(candidates)
}

fn convert_place(place: PlaceDto) -> Option<CandidatePlace> {
    let address = place.formatted_address.filter(|a| !a.trim().is_empty())?;

    Some(CandidatePlace {
        address,
        display_name: place.display_name.map(|name| name.text),
        rating: place.rating,
        rating_count: place.user_rating_count,
    })
}

/// Convert a `computeRoutes` response, taking the first (primary) route.
pub fn convert_routes(response: ComputeRoutesResponse) -> Result<RouteResult, MapsError> {
    let route = response
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or_else(|| MapsError::Response("no routes returned".to_string()))?;

    let duration_seconds = match route.duration.as_deref() {
        Some(raw) => parse_duration_secs(raw)
            .ok_or_else(|| MapsError::Response(format!("invalid route duration: {raw}")))?,
        None => 0,
    };

    Ok(RouteResult {
        distance_meters: route.distance_meters.unwrap_or(0),
        duration_seconds,
        encoded_path: route
            .polyline
            .and_then(|p| p.encoded_polyline)
            .unwrap_or_default(),
    })
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
