use serde_json::{Map, Value};

use crate::core::geometry::RegionGeometry;

/// GeoJSON property holding a feature's two-letter country code
pub const COUNTRY_CODE_PROPERTY: &str = "iso2cc";

/// GeoJSON properties combined into a polygon's output identifier
pub const ID_PROPERTIES: [&str; 1] = ["id"];

/// Separator between identifier components
pub const ID_SEPARATOR: &str = ".";

/// Whether a polygon carries a real shape or stands in for an unknown region
#[derive(Debug, Clone)]
pub enum PolygonKind {
    /// A real administrative boundary
    Region(RegionGeometry),
    /// A null-geometry entry used as a fallback identifier for a country
    /// (or globally, under the `??` code)
    Placeholder,
}

/// One feature of a polygon dataset
#[derive(Debug, Clone)]
pub struct RegionPolygon {
    /// Lowercased country code the polygon is filed under
    pub country_code: String,
    /// The feature's GeoJSON properties, as parsed
    pub properties: Map<String, Value>,
    pub kind: PolygonKind,
}

impl RegionPolygon {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.kind, PolygonKind::Placeholder)
    }

    /// The real geometry, if any
    pub fn geometry(&self) -> Option<&RegionGeometry> {
        match &self.kind {
            PolygonKind::Region(geometry) => Some(geometry),
            PolygonKind::Placeholder => None,
        }
    }

    /// Output identifier: the configured identifying properties joined by
    /// [`ID_SEPARATOR`], with missing properties rendered empty.
    pub fn composite_id(&self) -> String {
        ID_PROPERTIES
            .iter()
            .map(|property| property_text(self.properties.get(*property)))
            .collect::<Vec<_>>()
            .join(ID_SEPARATOR)
    }
}

/// Render a JSON property value as a plain output field
pub fn property_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
