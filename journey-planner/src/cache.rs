//! Caching layer for geocoding.
//!
//! A journey geocodes the canonical end address, the start address and every
//! candidate drawn from a search. Nearby searches from neighbouring stops
//! often return the same places, so lookups are cached by location text.
//! Failures are never cached: a transient error must not pin a location as
//! unresolvable.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Coordinate;
use crate::planner::{Geocoder, PlanError};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Geocoder with caching.
///
/// Wraps any [`Geocoder`] and remembers successful lookups.
pub struct CachedGeocoder<G> {
    inner: G,
    coordinates: MokaCache<String, Coordinate>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Create a new cached geocoder.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let coordinates = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, coordinates }
    }

    /// Access the underlying geocoder for lookups that bypass the cache.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.coordinates.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.coordinates.invalidate_all();
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn geocode(&self, location: &str) -> Result<Coordinate, PlanError> {
        if let Some(cached) = self.coordinates.get(location).await {
            trace!(location, "geocode cache hit");
            return Ok(cached);
        }

        let coordinate = self.inner.geocode(location).await?;
        self.coordinates
            .insert(location.to_string(), coordinate)
            .await;

        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Counts lookups; knows only "Cambridge".
    struct CountingGeocoder {
        calls: Mutex<usize>,
    }

    impl CountingGeocoder {
        fn new() -> Self {
            Self {
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl Geocoder for CountingGeocoder {
        async fn geocode(&self, location: &str) -> Result<Coordinate, PlanError> {
            *self.calls.lock().unwrap() += 1;
            if location == "Cambridge" {
                Ok(Coordinate::new(52.2053, 0.1218).unwrap())
            } else {
                Err(PlanError::LocationNotFound(location.to_string()))
            }
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[tokio::test]
    async fn repeated_lookup_hits_cache() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), &CacheConfig::default());

        let first = cached.geocode("Cambridge").await.unwrap();
        let second = cached.geocode("Cambridge").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner().calls(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), &CacheConfig::default());

        assert!(cached.geocode("Atlantis").await.is_err());
        assert!(cached.geocode("Atlantis").await.is_err());

        assert_eq!(cached.inner().calls(), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_lookup() {
        let cached = CachedGeocoder::new(CountingGeocoder::new(), &CacheConfig::default());

        cached.geocode("Cambridge").await.unwrap();
        cached.invalidate_all();
        cached.geocode("Cambridge").await.unwrap();

        assert_eq!(cached.inner().calls(), 2);
    }
}
