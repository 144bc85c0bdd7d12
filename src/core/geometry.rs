//! Planar geometry wrapper for region polygons.
//!
//! Resolution only needs two capabilities from a geometry: does it contain a
//! point, and how far (in kilometers) is a point from its boundary. Distances
//! are computed in the geometry's native degree units and scaled by a flat
//! degrees-to-kilometers constant. That ignores polar flattening, which is
//! fine for a tolerance whose only job is to absorb geometry resolution
//! aliasing at borders.

use geo::{Contains, EuclideanDistance, Geometry, MultiPolygon, Point};
use thiserror::Error;

/// Average kilometers per degree of latitude/longitude
pub const DEGREE_KM: f64 = 111.0;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Unsupported geometry type: {0} (expected Polygon or MultiPolygon)")]
    UnsupportedType(&'static str),
}

/// An administrative region shape with containment and boundary-distance tests
#[derive(Debug, Clone)]
pub struct RegionGeometry {
    shape: MultiPolygon<f64>,
}

impl RegionGeometry {
    pub fn new(shape: MultiPolygon<f64>) -> Self {
        Self { shape }
    }

    /// Wrap a parsed geometry. Region datasets only ever carry polygonal
    /// shapes; anything else is a data defect.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedType` for non-polygonal geometries.
    pub fn from_geometry(geometry: Geometry<f64>) -> Result<Self, GeometryError> {
        match geometry {
            Geometry::Polygon(polygon) => Ok(Self::new(MultiPolygon(vec![polygon]))),
            Geometry::MultiPolygon(multi) => Ok(Self::new(multi)),
            other => Err(GeometryError::UnsupportedType(geometry_name(&other))),
        }
    }

    /// True when the point lies inside the region
    pub fn contains(&self, point: Point<f64>) -> bool {
        self.shape.contains(&point)
    }

    /// Distance from the point to the region boundary in kilometers;
    /// zero when the point is inside.
    pub fn distance_km(&self, point: Point<f64>) -> f64 {
        self.shape
            .iter()
            .map(|polygon| point.euclidean_distance(polygon))
            .fold(f64::INFINITY, f64::min)
            * DEGREE_KM
    }
}

fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
