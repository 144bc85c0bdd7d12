//! Geolocation hierarchy levels and the confidence resolver.
//!
//! Each record reports values at up to five levels of increasing geographic
//! specificity, most with an accompanying 0-100 confidence figure. The
//! resolver picks the most specific level whose value is present, is not a
//! no-data sentinel, and whose confidence clears the run's threshold. That
//! "best level" is a policy gate only: it never changes which coordinates are
//! used for geometry.

use crate::core::record::LocationRecord;

/// One rung of the geolocation hierarchy
#[derive(Debug, Clone, Copy)]
pub struct HierarchyLevel {
    /// Record column holding the level's value
    pub value_column: &'static str,
    /// Record column holding the level's confidence; `None` for levels that
    /// are axiomatically reliable
    pub confidence_column: Option<&'static str>,
    /// Canonical level name, as used on the command line
    pub name: &'static str,
}

/// The hierarchy in ascending specificity order
pub const LEVELS: [HierarchyLevel; 5] = [
    HierarchyLevel {
        value_column: "edge-continent-code",
        confidence_column: None,
        name: "continent",
    },
    HierarchyLevel {
        value_column: "edge-two-letter-country",
        confidence_column: Some("edge-country-conf"),
        name: "country",
    },
    HierarchyLevel {
        value_column: "edge-region",
        confidence_column: Some("edge-region-conf"),
        name: "region",
    },
    HierarchyLevel {
        value_column: "edge-city",
        confidence_column: Some("edge-city-conf"),
        name: "city",
    },
    HierarchyLevel {
        value_column: "edge-postal-code",
        confidence_column: Some("edge-postal-conf"),
        name: "postal-code",
    },
];

/// Values that mean "no data" for a level regardless of confidence
const NO_DATA_TOKENS: [&str; 4] = ["?", "0", "-1", "no region"];

/// Index of a level by its canonical name
pub fn level_index(name: &str) -> Option<usize> {
    LEVELS.iter().position(|level| level.name == name)
}

/// The canonical level names, for CLI help and error messages
pub fn level_names() -> Vec<&'static str> {
    LEVELS.iter().map(|level| level.name).collect()
}

/// Index of the most specific level whose value is present, non-sentinel,
/// and whose confidence meets `threshold` (levels without a confidence
/// column, or records missing that column, count as 100).
///
/// Falls back to continent (index 0) when no level qualifies.
pub fn best_level(record: &LocationRecord, threshold: f64) -> usize {
    for (index, level) in LEVELS.iter().enumerate().rev() {
        let value = record.field(level.value_column);
        if value.is_empty() || NO_DATA_TOKENS.contains(&value) {
            continue;
        }

        let confidence = match level.confidence_column {
            Some(column) => match record.get(column) {
                // An unparsable confidence disqualifies the level rather
                // than aborting the whole run.
                Some(raw) => raw.trim().parse::<f64>().ok(),
                None => Some(100.0),
            },
            None => Some(100.0),
        };

        if confidence.is_some_and(|c| c >= threshold) {
            return index;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> LocationRecord {
        fields.iter().copied().collect()
    }

    #[test]
    fn test_level_index() {
        assert_eq!(level_index("continent"), Some(0));
        assert_eq!(level_index("country"), Some(1));
        assert_eq!(level_index("postal-code"), Some(4));
        assert_eq!(level_index("planet"), None);
    }

    #[test]
    fn test_confident_country_no_region() {
        let rec = record(&[
            ("edge-continent-code", "na"),
            ("edge-two-letter-country", "us"),
            ("edge-country-conf", "85"),
        ]);
        assert_eq!(best_level(&rec, 51.0), level_index("country").unwrap());
    }

    #[test]
    fn test_low_confidence_falls_back_to_continent() {
        let rec = record(&[
            ("edge-continent-code", "na"),
            ("edge-two-letter-country", "us"),
            ("edge-country-conf", "40"),
        ]);
        assert_eq!(best_level(&rec, 51.0), 0);
    }

    #[test]
    fn test_most_specific_level_wins() {
        let rec = record(&[
            ("edge-continent-code", "eu"),
            ("edge-two-letter-country", "de"),
            ("edge-country-conf", "99"),
            ("edge-region", "bayern"),
            ("edge-region-conf", "90"),
            ("edge-city", "munich"),
            ("edge-city-conf", "80"),
            ("edge-postal-code", "80331"),
            ("edge-postal-conf", "70"),
        ]);
        assert_eq!(best_level(&rec, 51.0), level_index("postal-code").unwrap());
    }

    #[test]
    fn test_sentinel_values_skipped() {
        for sentinel in ["", "?", "0", "-1", "no region"] {
            let rec = record(&[
                ("edge-continent-code", "eu"),
                ("edge-two-letter-country", "de"),
                ("edge-country-conf", "99"),
                ("edge-region", sentinel),
                ("edge-region-conf", "99"),
            ]);
            assert_eq!(
                best_level(&rec, 51.0),
                level_index("country").unwrap(),
                "sentinel {sentinel:?} should not qualify as a region"
            );
        }
    }

    #[test]
    fn test_missing_confidence_column_counts_as_full() {
        // Record from a table without edge-region-conf at all
        let rec = record(&[
            ("edge-continent-code", "eu"),
            ("edge-two-letter-country", "de"),
            ("edge-country-conf", "99"),
            ("edge-region", "bayern"),
        ]);
        assert_eq!(best_level(&rec, 51.0), level_index("region").unwrap());
    }

    #[test]
    fn test_unparsable_confidence_disqualifies_level() {
        let rec = record(&[
            ("edge-continent-code", "eu"),
            ("edge-two-letter-country", "de"),
            ("edge-country-conf", "n/a"),
        ]);
        assert_eq!(best_level(&rec, 51.0), 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rec = record(&[
            ("edge-continent-code", "na"),
            ("edge-two-letter-country", "us"),
            ("edge-country-conf", "51"),
        ]);
        assert_eq!(best_level(&rec, 51.0), level_index("country").unwrap());
    }
}
