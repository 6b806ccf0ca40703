//! Address parsing and typed record lookup.
//!
//! Both resolvers go through `lookup_record`, which turns everything the index
//! can say about an address into a `Resolution` instead of an error.

use std::net::IpAddr;

use maxminddb::Reader;
use serde::de::DeserializeOwned;

use super::types::Resolution;
use crate::error_handling::GeoIpError;

/// Parses a stored IP string into an address.
///
/// The string must be exactly an IPv4 or IPv6 address: no surrounding
/// whitespace, no port, no prefix length.
pub fn parse_ip(ip: &str) -> Result<IpAddr, GeoIpError> {
    ip.parse::<IpAddr>()
        .map_err(|_| GeoIpError::InvalidAddress(ip.to_string()))
}

/// Looks `addr` up and decodes the matching record into `T`.
///
/// A decode failure means the record exists but has another shape than `T`;
/// that is reported as `Malformed`, never as a panic or an error.
pub(crate) fn lookup_record<T>(reader: &Reader<Vec<u8>>, addr: IpAddr) -> Resolution<T>
where
    T: DeserializeOwned,
{
    let lookup = match reader.lookup(addr) {
        Ok(result) => result,
        Err(e) => return Resolution::Failed(e.to_string()),
    };

    if !lookup.has_data() {
        return Resolution::NotFound;
    }

    match lookup.decode::<T>() {
        Ok(Some(record)) => Resolution::Found(record),
        Ok(None) => Resolution::NotFound,
        Err(e) => Resolution::Malformed(e.to_string()),
    }
}
