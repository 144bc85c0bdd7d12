//! Parsers for the external inputs of a join run.
//!
//! This module provides parsers for:
//!
//! - **Locations tables**: delimited text, optionally gzip-compressed, with a
//!   header row selecting which candidate columns are present
//! - **Region GeoJSON documents**: one polygon dataset per file, grouped by
//!   country code at load time
//! - **Blacklist files**: flat CSV lists of untrusted country codes
//!
//! ## Example
//!
//! ```rust,no_run
//! use polyjoin::parsing::{locations, regions};
//! use std::path::Path;
//!
//! let dataset = regions::load_file(Path::new("regions.geojson")).unwrap();
//!
//! for record in locations::open(Path::new("locations.csv.gz")).unwrap() {
//!     let record = record.unwrap();
//!     println!("{} {}", record.id(), record.country_code());
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod blacklist;
pub mod locations;
pub mod regions;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("Feature {feature} in {}: {source}", path.display())]
    Geometry {
        path: PathBuf,
        feature: usize,
        source: crate::core::geometry::GeometryError,
    },

    #[error("Feature {feature} in {} has no {property:?} property", path.display())]
    MissingProperty {
        path: PathBuf,
        feature: usize,
        property: &'static str,
    },

    #[error("Locations table is missing required column {name:?}")]
    MissingColumn { name: &'static str },
}
