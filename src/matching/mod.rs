//! Spatial matching and per-record resolution.
//!
//! This module provides the resolution core:
//!
//! - [`SpatialMatcher`]: Finds the polygon containing (or nearly containing)
//!   a point within one dataset, one country at a time
//! - [`Resolver`]: Drives all datasets per record, enforcing confidence and
//!   blacklist policy and assembling the output row
//!
//! ## Matching Algorithm
//!
//! The matcher short-circuits on the first success, in order:
//!
//! 1. **Cache fast path**: re-test the previously matched polygon; consecutive
//!    records are usually in the same region, so this is the expected O(1) case
//! 2. **Exhaustive scan**: every real polygon of the country, in registration
//!    order (the first containing polygon wins when polygons overlap)
//! 3. **Proximity fallback**: the nearest polygon strictly within 20 km,
//!    absorbing coordinate aliasing at borders
//! 4. **Miss**: the caller falls back to placeholder polygons
//!
//! ## Example
//!
//! ```rust,no_run
//! use polyjoin::matching::{JoinPolicy, Resolver};
//! use polyjoin::parsing::{locations, regions};
//! use std::path::Path;
//!
//! let datasets = vec![regions::load_file(Path::new("regions.geojson")).unwrap()];
//! let policy = JoinPolicy::new(vec![1], 51.0, Default::default(), datasets.len()).unwrap();
//! let mut resolver = Resolver::new(&datasets, policy).unwrap();
//!
//! for record in locations::open(Path::new("locations.csv")).unwrap() {
//!     let row = resolver.resolve(&record.unwrap()).unwrap();
//!     println!("{}", row.join(","));
//! }
//! ```

pub mod matcher;
pub mod resolver;

pub use matcher::{MatchStats, SpatialMatcher};
pub use resolver::{ConfigError, JoinPolicy, ResolveError, Resolver};
