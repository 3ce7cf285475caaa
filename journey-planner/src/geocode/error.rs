//! Geocoding error types.

/// Errors that can occur when resolving a location to a coordinate.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// The geocoder had no match for the location
    #[error("location not found: {0}")]
    NotFound(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The match carried a coordinate that is not on the globe
    #[error("invalid coordinate for {location}: {lat}, {lon}")]
    InvalidCoordinate {
        location: String,
        lat: String,
        lon: String,
    },

    /// The User-Agent cannot be sent as a header value
    #[error("invalid user agent")]
    InvalidUserAgent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::NotFound("Atlantis".into());
        assert_eq!(err.to_string(), "location not found: Atlantis");

        let err = GeocodeError::Api {
            status: 429,
            message: "Too Many Requests".into(),
        };
        assert_eq!(err.to_string(), "API error 429: Too Many Requests");

        let err = GeocodeError::InvalidCoordinate {
            location: "Nowhere".into(),
            lat: "95.0".into(),
            lon: "0".into(),
        };
        assert_eq!(err.to_string(), "invalid coordinate for Nowhere: 95.0, 0");
    }
}
