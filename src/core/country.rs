//! Country-code normalization.
//!
//! Locations tables and region GeoJSON files do not always agree on country
//! codes. A fixed substitution table maps the known divergent codes (mostly
//! overseas territories) to the canonical ISO 3166-1 code the polygon
//! datasets file them under. Codes not in the table pass through unchanged.

/// Reported country code for private/reserved address space. Such records
/// carry no usable location and bypass geometric resolution entirely.
pub const WITHHELD_CC: &str = "**";

/// Reserved country code marking "unknown region" placeholder polygons,
/// usable as a global fallback for any record.
pub const UNKNOWN_CC: &str = "??";

/// Substitutions applied after lowercasing. Identity entries are listed so
/// the table documents every code known to need attention.
const CC_SUBSTITUTIONS: [(&str, &str); 11] = [
    ("uk", "gb"), // conversion to ISO 3166-1
    ("re", "fr"), // French overseas territories
    ("gp", "fr"),
    ("gf", "fr"),
    ("yt", "fr"),
    ("bq", "fr"),
    ("bv", "fr"),
    ("tk", "nz"), // Tokelau > New Zealand
    ("sj", "no"), // Svalbard > Norway
    ("cx", "cx"), // Indian Ocean Territories
    ("cc", "cc"),
];

/// Lowercase a raw country code and map it into the canonical code space.
pub fn normalize(raw: &str) -> String {
    let cc = raw.to_lowercase();
    for (from, to) in &CC_SUBSTITUTIONS {
        if cc == *from {
            return (*to).to_string();
        }
    }
    cc
}
