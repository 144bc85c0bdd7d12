//! Command-line interface for polyjoin.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **join**: Resolve each location record to one polygon id per dataset
//! - **polygon-table**: Project a regions GeoJSON into a CSV of polygon properties
//!
//! ## Usage
//!
//! ```text
//! # Join a locations table against two region datasets
//! polyjoin join -l locations.csv.gz \
//!     -g counties.geojson,provinces.geojson \
//!     -c region,country \
//!     -b untrusted_countries.csv > join-table.csv
//!
//! # Generate the polygon properties lookup table
//! polyjoin polygon-table -i counties.geojson > polygon-table.csv
//! ```

use clap::{Parser, Subcommand};

pub mod join;
pub mod polygon_table;

#[derive(Parser)]
#[command(name = "polyjoin")]
#[command(version)]
#[command(about = "Join geolocation records to administrative region polygons")]
#[command(
    long_about = "polyjoin figures out, for each location in a geolocation table, the matching id of the polygon in one or more regions GeoJSON files using a brute-force approach.\n\nSome countries can't be trusted for mapping regional-level centroids to regions in a GeoJSON file because of totally different fragmentation methods (districts vs provinces); the list of untrusted countries can be supplied as a blacklist CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Join locations to polygon ids, one output column per dataset
    Join(join::JoinArgs),

    /// Generate a table of polygon ids and properties from a GeoJSON
    PolygonTable(polygon_table::PolygonTableArgs),
}
