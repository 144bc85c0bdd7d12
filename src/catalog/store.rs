use std::collections::HashMap;

use crate::core::country::UNKNOWN_CC;
use crate::core::polygon::RegionPolygon;

/// One loaded polygon dataset, partitioned by country code and by kind.
///
/// Within a country, polygons keep their registration (file) order: when
/// overlapping polygons both contain a point, the first registered one wins,
/// and that ordering is preserved for output reproducibility.
#[derive(Debug, Default)]
pub struct PolygonDataset {
    /// Dataset name from the document's `table-name` field, if present
    pub name: Option<String>,

    /// Real polygons by country code
    regions: HashMap<String, Vec<RegionPolygon>>,

    /// Placeholder (null-geometry) polygons by country code
    placeholders: HashMap<String, Vec<RegionPolygon>>,
}

impl PolygonDataset {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            regions: HashMap::new(),
            placeholders: HashMap::new(),
        }
    }

    /// File a polygon under its country code, in the matching partition
    pub fn insert(&mut self, polygon: RegionPolygon) {
        let partition = if polygon.is_placeholder() {
            &mut self.placeholders
        } else {
            &mut self.regions
        };
        partition
            .entry(polygon.country_code.clone())
            .or_default()
            .push(polygon);
    }

    /// Whether the dataset registered any polygon (real or placeholder)
    /// under this country code
    pub fn has_country(&self, country_code: &str) -> bool {
        self.regions.contains_key(country_code) || self.placeholders.contains_key(country_code)
    }

    /// Real polygons for a country, in registration order
    pub fn regions(&self, country_code: &str) -> &[RegionPolygon] {
        self.regions.get(country_code).map_or(&[], Vec::as_slice)
    }

    /// The country's first-registered placeholder polygon, if any
    pub fn placeholder(&self, country_code: &str) -> Option<&RegionPolygon> {
        self.placeholders.get(country_code).and_then(|list| list.first())
    }

    /// The dataset-wide "unknown region" placeholder (country code `??`)
    pub fn global_placeholder(&self) -> Option<&RegionPolygon> {
        self.placeholder(UNKNOWN_CC)
    }

    /// Output column name for this dataset's polygon identifiers. Unnamed
    /// datasets get a positional default.
    pub fn id_column(&self, index: usize, dataset_count: usize) -> String {
        match &self.name {
            Some(name) => format!("{name}-id"),
            None if dataset_count > 1 => format!("polygon-table{index}-id"),
            None => "polygon-id".to_string(),
        }
    }

    /// Total number of polygons across both partitions
    pub fn len(&self) -> usize {
        self.regions.values().map(Vec::len).sum::<usize>()
            + self.placeholders.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::polygon::PolygonKind;
    use serde_json::json;

    fn placeholder(cc: &str, id: &str) -> RegionPolygon {
        let serde_json::Value::Object(properties) = json!({ "id": id }) else {
            unreachable!()
        };
        RegionPolygon {
            country_code: cc.to_string(),
            properties,
            kind: PolygonKind::Placeholder,
        }
    }

    #[test]
    fn test_partition_by_kind() {
        let mut dataset = PolygonDataset::new(None);
        dataset.insert(placeholder("us", "usa.unknown"));

        assert!(dataset.has_country("us"));
        assert!(dataset.regions("us").is_empty());
        assert_eq!(dataset.placeholder("us").unwrap().composite_id(), "usa.unknown");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_global_placeholder() {
        let mut dataset = PolygonDataset::new(None);
        assert!(dataset.global_placeholder().is_none());

        dataset.insert(placeholder("??", "unknown"));
        assert_eq!(dataset.global_placeholder().unwrap().composite_id(), "unknown");
    }

    #[test]
    fn test_first_placeholder_wins() {
        let mut dataset = PolygonDataset::new(None);
        dataset.insert(placeholder("us", "first"));
        dataset.insert(placeholder("us", "second"));
        assert_eq!(dataset.placeholder("us").unwrap().composite_id(), "first");
    }

    #[test]
    fn test_unknown_country() {
        let dataset = PolygonDataset::new(None);
        assert!(!dataset.has_country("zz"));
        assert!(dataset.regions("zz").is_empty());
        assert!(dataset.placeholder("zz").is_none());
    }

    #[test]
    fn test_id_column_naming() {
        let named = PolygonDataset::new(Some("counties".to_string()));
        assert_eq!(named.id_column(0, 1), "counties-id");

        let anonymous = PolygonDataset::new(None);
        assert_eq!(anonymous.id_column(0, 1), "polygon-id");
        assert_eq!(anonymous.id_column(1, 2), "polygon-table1-id");
    }
}
