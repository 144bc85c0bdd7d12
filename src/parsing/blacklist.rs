//! Blacklist loader: a flat CSV of country codes whose centroid matching is
//! untrusted at a dataset's minimum confidence level. All fields across all
//! rows are flattened into one set.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::parsing::ParseError;

/// # Errors
///
/// Returns `ParseError::Io`/`ParseError::Csv` when the file cannot be read.
pub fn load_file(path: &Path) -> Result<HashSet<String>, ParseError> {
    info!("loading {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(File::open(path)?);

    let mut codes = HashSet::new();
    let mut row = csv::StringRecord::new();
    while reader.read_record(&mut row)? {
        for field in row.iter() {
            let code = field.trim().to_lowercase();
            if !code.is_empty() {
                codes.insert(code);
            }
        }
    }

    info!("done loading {}", path.display());
    Ok(codes)
}
