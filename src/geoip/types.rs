//! GeoIP data structures.
//!
//! This module defines the lookup results shared by the geo and ASN resolvers.

use serde::{Deserialize, Serialize};

/// Metadata about a loaded lookup index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMetadata {
    /// Path the index was read from
    pub source: String,
    /// Database type recorded in the index (e.g. `GeoLite2-City`)
    pub database_type: String,
    /// Build version (extracted from the index's build epoch)
    pub version: String,
    /// 4 for IPv4-only trees, 6 for trees that also cover IPv4
    pub ip_version: u16,
}

/// Coordinates and accuracy of a geo match.
///
/// Field order is part of the output artifact's contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Accuracy radius in kilometers as reported by the index
    pub accuracy_radius: u16,
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
    /// IANA time zone name
    pub time_zone: String,
}

/// Result of a geo lookup that matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 code, empty if the match has no country data
    pub country_iso_code: String,
    /// Coordinates, zero if the match has no location data
    pub location: Location,
}

/// Outcome of looking an address up in an index.
///
/// Only `Found` carries data. Every other variant is an expected, per-record
/// outcome that degrades to the zero value; none of them aborts a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    /// The index has a usable record for the address
    Found(T),
    /// The index has no record (private or unallocated space), or the record
    /// lacks the field of interest
    NotFound,
    /// A record exists but does not decode into the expected shape
    Malformed(String),
    /// The index rejected the lookup itself
    Failed(String),
}

impl<T> Resolution<T> {
    /// `true` only for `Found`.
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// Returns the found value, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            _ => None,
        }
    }

    /// Transforms the found value, keeping every other outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Resolution::Found(value) => Resolution::Found(f(value)),
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Malformed(reason) => Resolution::Malformed(reason),
            Resolution::Failed(reason) => Resolution::Failed(reason),
        }
    }
}

impl<T: Default> Resolution<T> {
    /// Returns the found value, or the zero value for any other outcome.
    pub fn value_or_default(self) -> T {
        self.found().unwrap_or_default()
    }
}
