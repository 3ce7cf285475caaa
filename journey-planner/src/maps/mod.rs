//! Google Maps Platform client.
//!
//! This module provides an HTTP client for the three Google services the
//! planner relies on:
//! - **Distance Matrix** for the direct trip between two free-text locations,
//!   including the provider's canonical form of both addresses
//! - **Places (New) `searchNearby`** for points of interest around a coordinate
//! - **Routes `computeRoutes`** for travel time between coordinates and for the
//!   final multi-stop route
//!
//! Key characteristics of these APIs:
//! - Distance Matrix reports failures in a `status` field of a 200 response
//! - Places and Routes need an `X-Goog-FieldMask` header naming every field
//!   they should return
//! - Routes reports durations as strings such as `"165s"`
//! - A 403 almost always means a bad key, a missing API enablement or an
//!   exhausted quota

mod client;
mod convert;
mod error;
mod types;

pub use client::{GoogleMapsClient, MAX_SEARCH_RADIUS_METERS, MapsConfig};
pub use convert::parse_duration_secs;
pub use error::MapsError;
