//! Nominatim search API client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent; Nominatim blocks generic client identifiers.
pub const DEFAULT_USER_AGENT: &str = concat!("journey-planner/", env!("CARGO_PKG_VERSION"));

/// A single search match. Nominatim sends coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchMatch {
    pub lat: String,
    pub lon: String,
    pub display_name: Option<String>,
}

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent identifying this application
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NominatimConfig {
    /// Create a config for the public instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (self-hosted instance or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new Nominatim client.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::InvalidUserAgent)?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a free-text location to the coordinate of its best match.
    pub async fn geocode(&self, location: &str) -> Result<Coordinate, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", location), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let matches: Vec<SearchMatch> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| GeocodeError::NotFound(location.to_string()))?;

        if let Some(name) = &best.display_name {
            debug!(location, matched = %name, "geocoded location");
        }

        parse_match(location, &best)
    }
}

/// Convert a search match into a validated coordinate.
fn parse_match(location: &str, found: &SearchMatch) -> Result<Coordinate, GeocodeError> {
    let invalid = || GeocodeError::InvalidCoordinate {
        location: location.to_string(),
        lat: found.lat.clone(),
        lon: found.lon.clone(),
    };

    let lat: f64 = found.lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = found.lon.trim().parse().map_err(|_| invalid())?;

    Coordinate::new(lat, lon).map_err(|_| invalid())
}
