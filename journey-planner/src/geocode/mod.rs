//! Free-text geocoding via OpenStreetMap Nominatim.
//!
//! Turns an address or place name into a [`Coordinate`](crate::domain::Coordinate).
//! Nominatim's usage policy requires an identifying User-Agent and at most
//! one request per second, which the planner's sequential calls respect.

mod client;
mod error;

pub use client::{NominatimClient, NominatimConfig};
pub use error::GeocodeError;
