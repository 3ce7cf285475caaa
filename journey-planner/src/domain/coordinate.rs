//! Geographic coordinate type.

use std::fmt;

/// Error returned when constructing a coordinate outside the globe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Coordinates are plain values: two coordinates are the same place exactly
/// when both components are equal.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Coordinate;
///
/// let bury = Coordinate::new(52.2464, 0.7114).unwrap();
/// assert_eq!(bury.latitude(), 52.2464);
///
/// // Latitude beyond the poles is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
///
/// // So is a longitude past the antimeridian
/// assert!(Coordinate::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                reason: "components must be finite numbers",
            });
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be within -90..=90",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be within -180..=180",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anything on the globe is accepted and preserved
        #[test]
        fn valid_always_constructs(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lon).unwrap();
            prop_assert_eq!(c.latitude(), lat);
            prop_assert_eq!(c.longitude(), lon);
        }

        /// Latitudes beyond the poles are always rejected
        #[test]
        fn latitude_out_of_range_rejected(
            lat in prop_oneof![90.0001f64..1e6, -1e6f64..-90.0001],
            lon in -180.0f64..=180.0,
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        /// Longitudes beyond the antimeridian are always rejected
        #[test]
        fn longitude_out_of_range_rejected(
            lat in -90.0f64..=90.0,
            lon in prop_oneof![180.0001f64..1e6, -1e6f64..-180.0001],
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        /// Equality is by value
        #[test]
        fn equal_components_are_equal(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert_eq!(Coordinate::new(lat, lon).unwrap(), Coordinate::new(lat, lon).unwrap());
        }
    }
}
