//! Region GeoJSON loader.
//!
//! Each file becomes one [`PolygonDataset`]: features are filed under their
//! lowercased `iso2cc` property, features with a null geometry become
//! placeholder polygons, and features with country code `-1` (not bound to
//! any country) are dropped. An optional top-level `table-name` member names
//! the dataset's output column.

use std::path::{Path, PathBuf};

use geojson::{FeatureCollection, GeoJson};
use serde_json::Value;
use tracing::info;

use crate::catalog::store::PolygonDataset;
use crate::core::geometry::RegionGeometry;
use crate::core::polygon::{PolygonKind, RegionPolygon, COUNTRY_CODE_PROPERTY};
use crate::parsing::ParseError;

/// Country code marking features not bound to any country
const UNBOUND_CC: &str = "-1";

/// Top-level GeoJSON member naming the dataset
pub const TABLE_NAME_MEMBER: &str = "table-name";

/// Load every dataset, in command-line order.
///
/// # Errors
///
/// Propagates the first file that cannot be read or parsed.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<PolygonDataset>, ParseError> {
    paths.iter().map(|path| load_file(path)).collect()
}

/// Load one regions GeoJSON file into a dataset.
///
/// # Errors
///
/// Returns `ParseError::Io` when the file cannot be read,
/// `ParseError::GeoJson` for malformed documents, and
/// `ParseError::MissingProperty`/`ParseError::Geometry` for features without
/// a country code or with non-polygonal geometry.
pub fn load_file(path: &Path) -> Result<PolygonDataset, ParseError> {
    info!("loading {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let geojson: GeoJson = content.parse()?;
    let collection = FeatureCollection::try_from(geojson)?;

    let name = collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get(TABLE_NAME_MEMBER))
        .and_then(Value::as_str)
        .map(str::to_string);

    let mut dataset = PolygonDataset::new(name);

    for (index, feature) in collection.features.into_iter().enumerate() {
        let properties = feature.properties.unwrap_or_default();

        let country_code = properties
            .get(COUNTRY_CODE_PROPERTY)
            .and_then(Value::as_str)
            .ok_or(ParseError::MissingProperty {
                path: path.to_path_buf(),
                feature: index,
                property: COUNTRY_CODE_PROPERTY,
            })?
            .to_lowercase();

        if country_code == UNBOUND_CC {
            continue;
        }

        // Shapes are built once at load time; some features are dummy
        // geometries standing in for unknown regions.
        let kind = match feature.geometry {
            Some(geometry) => {
                let shape = geo::Geometry::<f64>::try_from(&geometry)?;
                let region =
                    RegionGeometry::from_geometry(shape).map_err(|source| ParseError::Geometry {
                        path: path.to_path_buf(),
                        feature: index,
                        source,
                    })?;
                PolygonKind::Region(region)
            }
            None => PolygonKind::Placeholder,
        };

        dataset.insert(RegionPolygon {
            country_code,
            properties,
            kind,
        });
    }

    info!("done loading {}", path.display());
    Ok(dataset)
}
