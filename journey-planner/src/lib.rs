//! Leisure journey planner.
//!
//! Plans a drive between two places that fills a given amount of time by
//! stopping at randomly discovered points of interest along the way.

pub mod cache;
pub mod domain;
pub mod geocode;
pub mod maps;
pub mod planner;
