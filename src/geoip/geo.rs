//! Geo resolver backed by a City index.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::Reader;
use serde::Deserialize;

use super::loader::{load_from_bytes, load_from_file};
use super::lookup::{lookup_record, parse_ip};
use super::types::{GeoLocation, IndexMetadata, Location, Resolution};
use crate::error_handling::GeoIpError;

/// The subset of a City record the pipeline consumes.
#[derive(Debug, Default, Deserialize)]
struct CityRecord {
    country: Option<CountryRecord>,
    location: Option<LocationRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct CountryRecord {
    iso_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LocationRecord {
    accuracy_radius: Option<u16>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    time_zone: Option<String>,
}

impl From<CityRecord> for GeoLocation {
    fn from(record: CityRecord) -> Self {
        let location = record.location.unwrap_or_default();
        GeoLocation {
            country_iso_code: record
                .country
                .and_then(|country| country.iso_code)
                .unwrap_or_default(),
            location: Location {
                accuracy_radius: location.accuracy_radius.unwrap_or_default(),
                latitude: location.latitude.unwrap_or_default(),
                longitude: location.longitude.unwrap_or_default(),
                time_zone: location.time_zone.unwrap_or_default(),
            },
        }
    }
}

/// Maps addresses to a country code and location.
///
/// Holds an immutable, fully loaded index; lookups take `&self` and are safe
/// to run from several threads at once.
pub struct GeoResolver {
    reader: Reader<Vec<u8>>,
    metadata: IndexMetadata,
}

impl GeoResolver {
    /// Opens the City index at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GeoIpError::Read` or `GeoIpError::InvalidDatabase`.
    pub async fn open(path: &Path) -> Result<Self, GeoIpError> {
        let (reader, metadata) = load_from_file(path).await?;
        Ok(Self::from_parts(reader, metadata))
    }

    /// Builds a resolver from index bytes already in memory.
    pub fn from_bytes(db_bytes: Vec<u8>, source: &str) -> Result<Self, GeoIpError> {
        let (reader, metadata) = load_from_bytes(db_bytes, source)?;
        Ok(Self::from_parts(reader, metadata))
    }

    fn from_parts(reader: Reader<Vec<u8>>, metadata: IndexMetadata) -> Self {
        if !metadata.database_type.contains("City") {
            log::warn!(
                "Geo index {} has database type {:?}, expected a City database",
                metadata.source,
                metadata.database_type
            );
        }
        Self { reader, metadata }
    }

    /// Metadata of the loaded index.
    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    /// Resolves an address given in string form.
    ///
    /// # Errors
    ///
    /// Returns `GeoIpError::InvalidAddress` without touching the index if `ip`
    /// is not an IPv4 or IPv6 address. Lookup misses are not errors.
    pub fn resolve(&self, ip: &str) -> Result<Resolution<GeoLocation>, GeoIpError> {
        Ok(self.lookup(parse_ip(ip)?))
    }

    /// Longest-prefix-match lookup of `addr`.
    pub fn lookup(&self, addr: IpAddr) -> Resolution<GeoLocation> {
        lookup_record::<CityRecord>(&self.reader, addr).map(GeoLocation::from)
    }
}
