//! # polyjoin
//!
//! A library for joining geolocation records to administrative region polygons.
//!
//! Geolocation databases report a latitude/longitude plus hierarchical place
//! fields (continent, country, region, city, postal code), each with a
//! confidence figure. Region polygon datasets fragment the world differently.
//! `polyjoin` resolves, for every record in a locations table, the identifier
//! of the polygon that best represents it in each loaded dataset, with a
//! multi-level confidence gate, a locality-exploiting match cache, a bounded
//! proximity fallback for border aliasing, and placeholder polygons for
//! everything that cannot be matched geometrically.
//!
//! ## Example
//!
//! ```rust,no_run
//! use polyjoin::matching::{JoinPolicy, Resolver};
//! use polyjoin::parsing::{locations, regions};
//! use polyjoin::core::hierarchy;
//! use std::path::Path;
//!
//! // One dataset, trusted down to region-level confidence
//! let datasets = vec![regions::load_file(Path::new("counties.geojson")).unwrap()];
//! let min_levels = vec![hierarchy::level_index("region").unwrap()];
//! let policy = JoinPolicy::new(min_levels, 51.0, Default::default(), datasets.len()).unwrap();
//!
//! let mut resolver = Resolver::new(&datasets, policy).unwrap();
//! for record in locations::open(Path::new("locations.csv")).unwrap() {
//!     let row = resolver.resolve(&record.unwrap()).unwrap();
//!     println!("{}", row.join(","));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, polygons, geometry, hierarchy and country-code tables
//! - [`catalog`]: Per-dataset polygon storage partitioned by country and kind
//! - [`matching`]: Spatial matcher and the per-record resolution orchestrator
//! - [`parsing`]: Locations CSV, regions GeoJSON, and blacklist readers
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::store::PolygonDataset;
pub use core::polygon::{PolygonKind, RegionPolygon};
pub use core::record::LocationRecord;
pub use matching::matcher::{MatchStats, SpatialMatcher};
pub use matching::resolver::{JoinPolicy, Resolver};
