//! Google Maps request and response DTOs.
//!
//! These types map directly to the JSON the Google APIs send and accept.
//! Response fields use `Option` or `#[serde(default)]` liberally because the
//! APIs omit fields rather than sending nulls, including numeric fields whose
//! value is zero.

use serde::{Deserialize, Serialize};

// ========== Distance Matrix ==========

/// Response from the Distance Matrix JSON API.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceMatrixResponse {
    /// Top-level status: "OK" on success.
    pub status: String,

    /// Explanation accompanying a non-OK status.
    pub error_message: Option<String>,

    /// Canonical origin addresses, one per requested origin.
    #[serde(default)]
    pub origin_addresses: Vec<String>,

    /// Canonical destination addresses, one per requested destination.
    #[serde(default)]
    pub destination_addresses: Vec<String>,

    /// One row per origin.
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

/// A row of the distance matrix: one element per destination.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    #[serde(default)]
    pub elements: Vec<MatrixElement>,
}

/// Metrics for a single origin/destination pair.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixElement {
    /// Element status: "OK", "NOT_FOUND" or "ZERO_RESULTS".
    pub status: String,

    pub distance: Option<TextValue>,

    pub duration: Option<TextValue>,
}

/// A metric. Its human-readable `text` rendering is not needed.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Metres or seconds.
    pub value: u64,
}

// ========== Places (New) ==========

/// Request body for `places:searchNearby`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNearbyRequest<'a> {
    pub location_restriction: LocationRestriction,
    pub rank_preference: &'static str,
    pub included_types: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationRestriction {
    pub circle: Circle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Circle {
    pub center: LatLng,
    /// Radius in metres.
    pub radius: f64,
}

/// Response from `places:searchNearby`.
///
/// A response without a `places` field is treated as an error by the
/// conversion layer.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchNearbyResponse {
    pub places: Option<Vec<PlaceDto>>,
}

/// A place, restricted to the fields named in the field mask.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDto {
    pub formatted_address: Option<String>,
    pub display_name: Option<LocalizedText>,
    pub rating: Option<f64>,
    pub user_rating_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
}

// ========== Routes ==========

/// Request body for `directions/v2:computeRoutes`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: RouteWaypoint,
    pub destination: RouteWaypoint,
    pub intermediates: Vec<RouteWaypoint>,
    pub travel_mode: &'static str,
    pub routing_preference: &'static str,
    pub compute_alternative_routes: bool,
    pub route_modifiers: RouteModifiers,
    pub language_code: String,
    pub units: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteWaypoint {
    pub location: RouteLocation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLocation {
    pub lat_lng: LatLng,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteModifiers {
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    pub avoid_ferries: bool,
}

/// Response from `computeRoutes`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComputeRoutesResponse {
    pub routes: Option<Vec<RouteDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    /// Omitted when zero.
    pub distance_meters: Option<u32>,

    /// Seconds with an `s` suffix, e.g. `"165s"`.
    pub duration: Option<String>,

    pub polyline: Option<PolylineDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineDto {
    pub encoded_polyline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_distance_matrix() {
        let json = r#"{
            "destination_addresses": ["Bury St Edmunds, Bury Saint Edmunds, UK"],
            "origin_addresses": ["London, UK"],
            "rows": [{
                "elements": [{
                    "distance": {"text": "133 km", "value": 133313},
                    "duration": {"text": "1 hour 47 mins", "value": 6398},
                    "status": "OK"
                }]
            }],
            "status": "OK"
        }"#;

        let response: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        assert_eq!(response.origin_addresses, vec!["London, UK"]);
        let element = &response.rows[0].elements[0];
        assert_eq!(element.distance.as_ref().unwrap().value, 133313);
        assert_eq!(element.duration.as_ref().unwrap().value, 6398);
    }

    #[test]
    fn deserialize_distance_matrix_error() {
        let json = r#"{
            "destination_addresses": [],
            "origin_addresses": [],
            "rows": [],
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }"#;

        let response: DistanceMatrixResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.rows.is_empty());
        assert!(response.error_message.unwrap().contains("invalid"));
    }

    #[test]
    fn deserialize_nearby_places() {
        let json = r#"{
            "places": [
                {
                    "formattedAddress": "West Midland Safari and Leisure Park, Bewdley DY12 1LF, UK",
                    "rating": 4.5,
                    "userRatingCount": 2,
                    "displayName": {"text": "Twilight Cave", "languageCode": "en"}
                },
                {"formattedAddress": "Nowhere Lane, UK"}
            ]
        }"#;

        let response: SearchNearbyResponse = serde_json::from_str(json).unwrap();
        let places = response.places.unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name.as_ref().unwrap().text, "Twilight Cave");
        assert_eq!(places[0].user_rating_count, Some(2));
        assert!(places[1].rating.is_none());
    }

    #[test]
    fn deserialize_empty_nearby_response() {
        let response: SearchNearbyResponse = serde_json::from_str("{}").unwrap();
        assert!(response.places.is_none());
    }

    #[test]
    fn deserialize_routes() {
        let json = r#"{
            "routes": [{
                "distanceMeters": 772,
                "duration": "165s",
                "polyline": {"encodedPolyline": "ipkcFfichVnP@j@BLoFVwM{E?"}
            }]
        }"#;

        let response: ComputeRoutesResponse = serde_json::from_str(json).unwrap();
        let route = &response.routes.unwrap()[0];
        assert_eq!(route.distance_meters, Some(772));
        assert_eq!(route.duration.as_deref(), Some("165s"));
        assert_eq!(
            route.polyline.as_ref().unwrap().encoded_polyline.as_deref(),
            Some("ipkcFfichVnP@j@BLoFVwM{E?")
        );
    }

    #[test]
    fn serialize_nearby_request() {
        let types = vec!["tourist_attraction".to_string()];
        let request = SearchNearbyRequest {
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng {
                        latitude: 52.2635809,
                        longitude: 0.6916481,
                    },
                    radius: 10000.0,
                },
            },
            rank_preference: "DISTANCE",
            included_types: &types,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["rankPreference"], "DISTANCE");
        assert_eq!(value["includedTypes"][0], "tourist_attraction");
        assert_eq!(value["locationRestriction"]["circle"]["radius"], 10000.0);
        assert_eq!(
            value["locationRestriction"]["circle"]["center"]["latitude"],
            52.2635809
        );
    }

    #[test]
    fn serialize_routes_request_uses_camel_case() {
        let waypoint = RouteWaypoint {
            location: RouteLocation {
                lat_lng: LatLng {
                    latitude: 1.0,
                    longitude: 2.0,
                },
            },
        };
        let request = ComputeRoutesRequest {
            origin: waypoint.clone(),
            destination: waypoint,
            intermediates: Vec::new(),
            travel_mode: "DRIVE",
            routing_preference: "TRAFFIC_AWARE",
            compute_alternative_routes: false,
            route_modifiers: RouteModifiers::default(),
            language_code: "en-GB".to_string(),
            units: "METRIC",
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["origin"]["location"]["latLng"]["longitude"], 2.0);
        assert_eq!(value["travelMode"], "DRIVE");
        assert_eq!(value["routeModifiers"]["avoidTolls"], false);
        assert_eq!(value["intermediates"].as_array().unwrap().len(), 0);
    }
}
