//! Locations table reader.
//!
//! The table is delimited text with a header row; only the recognized
//! candidate columns are retained, and a handful of columns are required for
//! the join to make sense at all. A `.gz` suffix selects transparent gzip
//! decompression.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::info;

use crate::core::record::{LocationRecord, CANDIDATE_COLUMNS, REQUIRED_COLUMNS};
use crate::parsing::ParseError;

/// Streaming reader over a locations table
pub struct LocationReader<R: Read> {
    reader: csv::Reader<R>,
    /// Retained (column name, input index) pairs, in candidate order
    columns: Vec<(&'static str, usize)>,
}

/// Open a locations file, decompressing when the path ends in `.gz`.
///
/// # Errors
///
/// Returns `ParseError::Io` when the file cannot be opened, or any header
/// error from [`LocationReader::from_reader`].
pub fn open(path: &Path) -> Result<LocationReader<Box<dyn Read>>, ParseError> {
    info!("reading {}", path.display());

    let file = File::open(path)?;
    let is_gzip = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"));

    let reader: Box<dyn Read> = if is_gzip {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    LocationReader::from_reader(reader)
}

impl<R: Read> LocationReader<R> {
    /// Read the header row and work out which candidate columns are present.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Csv` for an unreadable header and
    /// `ParseError::MissingColumn` when a required column is absent.
    pub fn from_reader(reader: R) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let columns: Vec<(&'static str, usize)> = CANDIDATE_COLUMNS
            .iter()
            .filter_map(|name| {
                headers
                    .iter()
                    .position(|header| header == *name)
                    .map(|index| (*name, index))
            })
            .collect();

        for name in REQUIRED_COLUMNS {
            if !columns.iter().any(|(column, _)| *column == name) {
                return Err(ParseError::MissingColumn { name });
            }
        }

        Ok(Self { reader, columns })
    }
}

impl<R: Read> Iterator for LocationReader<R> {
    type Item = Result<LocationRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut row = csv::StringRecord::new();
        match self.reader.read_record(&mut row) {
            Ok(false) => None,
            Err(error) => Some(Err(error.into())),
            Ok(true) => {
                let mut record = LocationRecord::new();
                for (column, index) in &self.columns {
                    record.set(*column, row.get(*index).unwrap_or(""));
                }
                Some(Ok(record))
            }
        }
    }
}
