//! Points of interest the planner may stop at.

use super::Coordinate;

/// A point of interest returned by a nearby search.
///
/// Candidates are unresolved: the address must be geocoded before the
/// place can become part of a route.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePlace {
    /// Formatted postal address, used for geocoding.
    pub address: String,

    /// Human-readable name, if the provider supplied one.
    pub display_name: Option<String>,

    /// Average user rating (typically 1.0 to 5.0).
    pub rating: Option<f64>,

    /// Number of user ratings behind `rating`.
    pub rating_count: Option<u32>,
}

impl CandidatePlace {
    /// Create a candidate with only an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: None,
            rating: None,
            rating_count: None,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the rating and how many ratings it is based on.
    pub fn with_rating(mut self, rating: f64, count: u32) -> Self {
        self.rating = Some(rating);
        self.rating_count = Some(count);
        self
    }

    /// Name to show a user: the display name, falling back to the address.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.address)
    }
}

/// A candidate that was accepted into a journey.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// The place as the nearby search described it.
    pub place: CandidatePlace,

    /// Where the place's address resolved to.
    pub coordinate: Coordinate,

    /// Travel time from the previous point of the journey, in seconds.
    pub travel_secs: u32,
}
