//! ASN resolver backed by an ASN index.

use std::net::IpAddr;
use std::path::Path;

use maxminddb::Reader;
use serde::Deserialize;

use super::loader::{load_from_bytes, load_from_file};
use super::lookup::{lookup_record, parse_ip};
use super::types::{IndexMetadata, Resolution};
use crate::error_handling::GeoIpError;

/// Typed view of an ASN record.
///
/// Records are loosely shaped, so the organization is optional: a record
/// without it is a miss. A record where it is present but not a string (or a
/// record that is not a map at all) fails to decode and is reported as
/// malformed.
#[derive(Debug, Deserialize)]
struct AsnRecord {
    autonomous_system_organization: Option<String>,
}

/// Maps addresses to the name of the organization owning their network.
pub struct AsnResolver {
    reader: Reader<Vec<u8>>,
    metadata: IndexMetadata,
}

impl AsnResolver {
    /// Opens the ASN index at `path`.
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
        if !metadata.database_type.contains("ASN") {
            log::warn!(
                "ASN index {} has database type {:?}, expected an ASN database",
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
    /// Returns `GeoIpError::InvalidAddress` if `ip` is not an address.
    pub fn resolve(&self, ip: &str) -> Result<Resolution<String>, GeoIpError> {
        Ok(self.lookup(parse_ip(ip)?))
    }

    /// Longest-prefix-match lookup of `addr`, yielding the organization name.
    pub fn lookup(&self, addr: IpAddr) -> Resolution<String> {
        match lookup_record::<AsnRecord>(&self.reader, addr) {
            Resolution::Found(AsnRecord {
                autonomous_system_organization: Some(organization),
            }) => Resolution::Found(organization),
            Resolution::Found(_) => Resolution::NotFound,
            Resolution::NotFound => Resolution::NotFound,
            Resolution::Malformed(reason) => Resolution::Malformed(reason),
            Resolution::Failed(reason) => Resolution::Failed(reason),
        }
    }
}
