//! Polygon dataset storage.
//!
//! A [`store::PolygonDataset`] holds one named GeoJSON dataset's polygons
//! grouped by lowercased country code, partitioned at load time into real
//! polygons (searchable geometry) and placeholder polygons (null geometry,
//! standing in for unknown regions). The partition is what makes the
//! "is this a fallback" question explicit throughout resolution.
//!
//! ## Example
//!
//! ```rust,no_run
//! use polyjoin::parsing::regions;
//! use std::path::Path;
//!
//! let dataset = regions::load_file(Path::new("regions.geojson")).unwrap();
//!
//! for polygon in dataset.regions("us") {
//!     println!("{}", polygon.composite_id());
//! }
//! ```

pub mod store;

pub use store::PolygonDataset;
