use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::catalog::store::PolygonDataset;
use crate::core::country::{self, WITHHELD_CC};
use crate::core::hierarchy;
use crate::core::record::{LocationRecord, LATITUDE_COLUMN, LONGITUDE_COLUMN, RECORD_ID_COLUMN};
use crate::matching::matcher::{MatchStats, SpatialMatcher};

/// Configuration defects that would silently corrupt the whole output.
/// These abort the run before any row is written.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("There must be the same number of polygon datasets ({datasets}) and min confidence levels ({levels})")]
    DatasetLevelMismatch { datasets: usize, levels: usize },

    #[error("Unrecognised confidence level: {name}. Allowed values: {allowed}")]
    UnknownLevel { name: String, allowed: String },

    #[error("Confidence threshold represents a percentage and must be between 0 and 100 (got {value})")]
    ThresholdOutOfRange { value: f64 },
}

/// Per-record failures that cannot be recovered by placeholder fallback
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Unable to find unknown country polygon (\"??\" expected) in polygon dataset at position {dataset}")]
    MissingGlobalPlaceholder { dataset: usize },

    #[error("Unable to find unknown polygon for country {country} in polygon dataset at position {dataset}")]
    MissingPlaceholder { country: String, dataset: usize },

    #[error("Record {locid}: unparsable {column} value {value:?}")]
    BadCoordinate {
        locid: String,
        column: &'static str,
        value: String,
    },
}

/// The validated join policy: one minimum confidence level per dataset, the
/// global confidence threshold, and the shared country blacklist.
#[derive(Debug, Clone)]
pub struct JoinPolicy {
    /// Minimum trusted hierarchy level per dataset, as indices into
    /// [`hierarchy::LEVELS`]
    pub min_levels: Vec<usize>,
    /// Percentage (0-100) a level's confidence must meet
    pub confidence_threshold: f64,
    /// Countries whose centroid matching is unreliable at a dataset's
    /// minimum level, normalized country codes
    pub blacklist: HashSet<String>,
}

impl JoinPolicy {
    /// Validate the policy against the number of datasets it will drive.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] on count mismatch or an out-of-range
    /// threshold.
    pub fn new(
        min_levels: Vec<usize>,
        confidence_threshold: f64,
        blacklist: HashSet<String>,
        dataset_count: usize,
    ) -> Result<Self, ConfigError> {
        if min_levels.len() != dataset_count {
            return Err(ConfigError::DatasetLevelMismatch {
                datasets: dataset_count,
                levels: min_levels.len(),
            });
        }
        if !(0.0..=100.0).contains(&confidence_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: confidence_threshold,
            });
        }
        Ok(Self {
            min_levels,
            confidence_threshold,
            blacklist,
        })
    }
}

/// Drives resolution per record across all datasets simultaneously.
///
/// Owns one [`SpatialMatcher`] (and thus one cache hint) per dataset; records
/// must be resolved in input order for the hints to pay off.
pub struct Resolver<'a> {
    datasets: &'a [PolygonDataset],
    policy: JoinPolicy,
    matchers: Vec<SpatialMatcher<'a>>,
}

impl<'a> Resolver<'a> {
    /// # Errors
    ///
    /// Returns `ConfigError::DatasetLevelMismatch` when the policy was
    /// validated against a different dataset count.
    pub fn new(datasets: &'a [PolygonDataset], policy: JoinPolicy) -> Result<Self, ConfigError> {
        if policy.min_levels.len() != datasets.len() {
            return Err(ConfigError::DatasetLevelMismatch {
                datasets: datasets.len(),
                levels: policy.min_levels.len(),
            });
        }
        let matchers = datasets.iter().map(SpatialMatcher::new).collect();
        Ok(Self {
            datasets,
            policy,
            matchers,
        })
    }

    /// Output header row: the record identifier column followed by one
    /// polygon-id column per dataset
    pub fn header(&self) -> Vec<String> {
        let mut header = vec![RECORD_ID_COLUMN.to_string()];
        let count = self.datasets.len();
        header.extend(
            self.datasets
                .iter()
                .enumerate()
                .map(|(index, dataset)| dataset.id_column(index, count)),
        );
        header
    }

    /// Resolve one record into its output row.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] for fatal conditions: a dataset missing a
    /// required placeholder, or unparsable coordinates. Geometric misses are
    /// recovered via placeholders and only logged.
    pub fn resolve(&mut self, record: &LocationRecord) -> Result<Vec<String>, ResolveError> {
        let mut row = Vec::with_capacity(self.datasets.len() + 1);
        row.push(record.id().to_string());

        // Dummy location for private/reserved address space: no geometry to
        // search, every dataset answers with its global placeholder.
        if record.country_code().to_lowercase() == WITHHELD_CC {
            for (index, dataset) in self.datasets.iter().enumerate() {
                let placeholder = dataset.global_placeholder().ok_or(
                    ResolveError::MissingGlobalPlaceholder { dataset: index + 1 },
                )?;
                row.push(placeholder.composite_id());
            }
            return Ok(row);
        }

        let cc = country::normalize(record.country_code());
        let latitude = parse_coordinate(record, LATITUDE_COLUMN)?;
        let longitude = parse_coordinate(record, LONGITUDE_COLUMN)?;
        let best_level = hierarchy::best_level(record, self.policy.confidence_threshold);

        for (index, dataset) in self.datasets.iter().enumerate() {
            let min_level = self.policy.min_levels[index];

            // Geometric search only when the dataset knows the country, the
            // record has coordinates at all, and the record's confidence is
            // strictly finer than the dataset's minimum level, or exactly at
            // it for a country whose centroids are trusted.
            let searchable = dataset.has_country(&cc)
                && (latitude != 0.0 || longitude != 0.0)
                && (best_level > min_level
                    || (best_level == min_level && !self.policy.blacklist.contains(&cc)));

            let mut polygon = None;
            if searchable {
                polygon = self.matchers[index].locate(latitude, longitude, &cc);
                if polygon.is_none() {
                    warn!(
                        dataset = %dataset.id_column(index, self.datasets.len()),
                        country = %cc,
                        locid = %record.id(),
                        latitude,
                        longitude,
                        "couldn't find polygon where to place location"
                    );
                }
            }

            let polygon = match polygon {
                Some(polygon) => polygon,
                None => dataset
                    .placeholder(&cc)
                    .or_else(|| dataset.global_placeholder())
                    .ok_or(ResolveError::MissingPlaceholder {
                        country: cc.clone(),
                        dataset: index + 1,
                    })?,
            };
            row.push(polygon.composite_id());
        }

        Ok(row)
    }

    /// Lookup counters per dataset, in dataset order
    pub fn stats(&self) -> Vec<MatchStats> {
        self.matchers.iter().map(|matcher| matcher.stats).collect()
    }
}

fn parse_coordinate(
    record: &LocationRecord,
    column: &'static str,
) -> Result<f64, ResolveError> {
    let raw = record.field(column);
    raw.trim().parse().map_err(|_| ResolveError::BadCoordinate {
        locid: record.id().to_string(),
        column,
        value: raw.to_string(),
    })
}
