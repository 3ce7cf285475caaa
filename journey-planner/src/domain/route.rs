//! Route metrics reported by the routing services.

/// Distance and duration of the direct trip between two free-text locations.
///
/// The origin and destination are the provider's canonical form of the
/// addresses that were asked about (e.g. "London" becomes "London, UK").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceEstimate {
    /// Canonical origin address.
    pub origin: String,

    /// Canonical destination address.
    pub destination: String,

    /// Road distance in metres.
    pub distance_meters: u32,

    /// Travel time in seconds.
    pub duration_seconds: u32,
}

/// A computed route through an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    /// Total distance in metres.
    pub distance_meters: u32,

    /// Total travel time in seconds.
    pub duration_seconds: u32,

    /// Path geometry in the encoded polyline format.
    pub encoded_path: String,
}
