//! GeoIP and ASN lookup using MaxMind DB indexes.
//!
//! This module provides the two resolvers of the enrichment pipeline. Each one
//! owns an immutable, fully loaded index and answers longest-prefix-match
//! lookups with a `Resolution`: misses, malformed records and rejected
//! lookups are ordinary outcomes, never errors.

mod asn;
#[cfg(test)]
pub(crate) mod fixture;
mod geo;
mod loader;
mod lookup;
mod metadata;
mod types;

// Re-export public API
pub use asn::AsnResolver;
pub use geo::GeoResolver;
pub use lookup::parse_ip;
pub use types::{GeoLocation, IndexMetadata, Location, Resolution};
