use geo::Point;
use serde::Serialize;

use crate::catalog::store::PolygonDataset;
use crate::core::polygon::RegionPolygon;

/// Maximum boundary distance for accepting a point that falls just outside
/// every polygon, validating border points displaced by geometrical
/// resolution aliasing
pub const PROXIMITY_THRESHOLD_KM: f64 = 20.0;

/// Lookup counters, exposed for diagnostics and for asserting the cache
/// fast path in tests
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct MatchStats {
    /// Lookups resolved by re-testing the previous match
    pub cache_hits: u64,
    /// Individual containment tests performed during exhaustive scans
    pub scan_tests: u64,
    /// Lookups resolved by the proximity fallback
    pub proximity_matches: u64,
    /// Lookups that found no containing or sufficiently close polygon
    pub misses: u64,
}

/// The previous match, as a stable handle into the dataset
#[derive(Debug, Clone)]
struct LastMatch {
    country_code: String,
    index: usize,
}

/// Point-in-polygon search over one dataset.
///
/// Holds the dataset's single mutable piece of resolution state: the last
/// matched polygon, reused opportunistically because consecutive input
/// records tend to be spatially local. The hint is overwritten after every
/// full lookup, including misses.
#[derive(Debug)]
pub struct SpatialMatcher<'a> {
    dataset: &'a PolygonDataset,
    last_match: Option<LastMatch>,
    pub stats: MatchStats,
}

impl<'a> SpatialMatcher<'a> {
    pub fn new(dataset: &'a PolygonDataset) -> Self {
        Self {
            dataset,
            last_match: None,
            stats: MatchStats::default(),
        }
    }

    /// Find the polygon for a coordinate within one country, or `None` when
    /// nothing contains the point and nothing is close enough. The caller is
    /// responsible for placeholder fallback.
    pub fn locate(&mut self, latitude: f64, longitude: f64, country_code: &str) -> Option<&'a RegionPolygon> {
        let point = Point::new(longitude, latitude);

        // Chances are the region for this point is the same as the last one,
        // so check that before searching the whole country.
        if let Some(last) = &self.last_match {
            if last.country_code == country_code {
                let polygon = &self.dataset.regions(country_code)[last.index];
                if polygon.geometry().is_some_and(|g| g.contains(point)) {
                    self.stats.cache_hits += 1;
                    return Some(polygon);
                }
            }
        }

        let found = self.search(point, country_code);
        self.last_match = found.map(|(index, _)| LastMatch {
            country_code: country_code.to_string(),
            index,
        });
        found.map(|(_, polygon)| polygon)
    }

    fn search(&mut self, point: Point<f64>, country_code: &str) -> Option<(usize, &'a RegionPolygon)> {
        let candidates = self.dataset.regions(country_code);

        // Full scan in registration order
        for (index, polygon) in candidates.iter().enumerate() {
            let Some(geometry) = polygon.geometry() else {
                continue;
            };
            self.stats.scan_tests += 1;
            if geometry.contains(point) {
                return Some((index, polygon));
            }
        }

        // Nearest polygon strictly within the proximity threshold; ties keep
        // the first-registered candidate.
        let mut closest: Option<(usize, &'a RegionPolygon, f64)> = None;
        for (index, polygon) in candidates.iter().enumerate() {
            let Some(geometry) = polygon.geometry() else {
                continue;
            };
            let km = geometry.distance_km(point);
            if km < PROXIMITY_THRESHOLD_KM && closest.map_or(true, |(_, _, best)| km < best) {
                closest = Some((index, polygon, km));
            }
        }

        if let Some((index, polygon, _)) = closest {
            self.stats.proximity_matches += 1;
            return Some((index, polygon));
        }

        self.stats.misses += 1;
        None
    }
}
