use std::collections::HashMap;

/// Column holding the unique record identifier
pub const RECORD_ID_COLUMN: &str = "locid";

/// Column holding the record latitude
pub const LATITUDE_COLUMN: &str = "edge-latitude";

/// Column holding the record longitude
pub const LONGITUDE_COLUMN: &str = "edge-longitude";

/// Column holding the two-letter country code reported for the record
pub const COUNTRY_CODE_COLUMN: &str = "edge-two-letter-country";

/// Candidate columns retained from a locations table, in preference order.
/// Columns absent from the input header are simply skipped.
pub const CANDIDATE_COLUMNS: [&str; 15] = [
    RECORD_ID_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    "edge-continent-code",
    COUNTRY_CODE_COLUMN,
    "edge-country",
    "edge-region",
    "edge-region-code",
    "edge-metro-code",
    "edge-city",
    "edge-postal-code",
    "edge-country-conf",
    "edge-region-conf",
    "edge-city-conf",
    "edge-postal-conf",
];

/// Columns that must be present for a locations table to be joinable at all
pub const REQUIRED_COLUMNS: [&str; 4] = [
    RECORD_ID_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    COUNTRY_CODE_COLUMN,
];

/// One row of a locations table, reduced to the recognized columns.
///
/// Records are immutable once read and consumed once per resolution; fields
/// are looked up by column name so the hierarchy table can stay declarative.
#[derive(Debug, Clone, Default)]
pub struct LocationRecord {
    fields: HashMap<String, String>,
}

impl LocationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw field value, or `None` when the column was not in the input
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Field value with absent columns read as empty
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn id(&self) -> &str {
        self.field(RECORD_ID_COLUMN)
    }

    pub fn country_code(&self) -> &str {
        self.field(COUNTRY_CODE_COLUMN)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocationRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (column, value) in iter {
            record.set(column, value);
        }
        record
    }
}
