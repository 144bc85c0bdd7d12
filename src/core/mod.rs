//! Core data types for the location-to-polygon join.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`record::LocationRecord`]: One row of a locations table, keyed by column name
//! - [`polygon::RegionPolygon`]: A polygon dataset entry, real or placeholder
//! - [`geometry::RegionGeometry`]: Point containment and boundary distance
//! - [`hierarchy`]: The geolocation level table and confidence resolver
//! - [`country`]: Country-code normalization and the reserved sentinel codes
//!
//! ## Hierarchy Levels
//!
//! Geolocation data is reported at increasing specificity:
//!
//! | Level       | Value column            | Confidence column |
//! |-------------|-------------------------|-------------------|
//! | continent   | edge-continent-code     | (always trusted)  |
//! | country     | edge-two-letter-country | edge-country-conf |
//! | region      | edge-region             | edge-region-conf  |
//! | city        | edge-city               | edge-city-conf    |
//! | postal-code | edge-postal-code        | edge-postal-conf  |
//!
//! Resolution always degrades gracefully toward less specific levels.

pub mod country;
pub mod geometry;
pub mod hierarchy;
pub mod polygon;
pub mod record;
