//! Enrichment pipeline.
//!
//! Turns stored nodes into enriched output records: parse the stored IP,
//! resolve it through both indexes, assemble. Only store errors stop the
//! pipeline; every per-record problem degrades to an empty field or, for an
//! unparseable address, a skipped record.

mod types;

pub use types::{EnrichedBatch, EnrichedNode};

use futures::{Stream, TryStreamExt};
use log::{debug, warn};

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, StoreError, WarningType};
use crate::geoip::{parse_ip, AsnResolver, GeoResolver, Resolution};
use crate::storage::StoredNode;

/// Enriches a single stored node.
///
/// Returns `None` if the node's IP field is not an address; the skip is
/// logged and counted. Lookup misses still produce a record.
pub fn enrich_node(
    node: &StoredNode,
    geo: &GeoResolver,
    asn: &AsnResolver,
    stats: &ProcessingStats,
) -> Option<EnrichedNode> {
    let addr = match parse_ip(&node.ip) {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Skipping node {}: {e}", node.id);
            stats.increment_error(ErrorType::InvalidIpAddress);
            return None;
        }
    };

    let geo_resolution = geo.lookup(addr);
    match &geo_resolution {
        Resolution::Found(_) => {}
        Resolution::NotFound => {
            debug!("No GeoIP entry for {}", node.ip);
            stats.increment_warning(WarningType::GeoNotFound);
        }
        Resolution::Malformed(reason) => {
            warn!("Malformed GeoIP record for {}: {reason}", node.ip);
            stats.increment_warning(WarningType::GeoRecordMalformed);
        }
        Resolution::Failed(reason) => {
            warn!("GeoIP lookup failed for {}: {reason}", node.ip);
            stats.increment_warning(WarningType::GeoLookupFailed);
        }
    }

    let asn_resolution = asn.lookup(addr);
    match &asn_resolution {
        Resolution::Found(_) => {}
        Resolution::NotFound => {
            debug!("No ASN entry for {}", node.ip);
            stats.increment_warning(WarningType::AsnNotFound);
        }
        Resolution::Malformed(reason) => {
            warn!("Malformed ASN record for {}: {reason}", node.ip);
            stats.increment_warning(WarningType::AsnRecordMalformed);
        }
        Resolution::Failed(reason) => {
            warn!("ASN lookup failed for {}: {reason}", node.ip);
            stats.increment_warning(WarningType::AsnLookupFailed);
        }
    }

    let geo_location = geo_resolution.value_or_default();
    stats.increment_info(InfoType::NodeEnriched);

    Some(EnrichedNode {
        ip: node.ip.clone(),
        asn: asn_resolution.value_or_default(),
        country: geo_location.country_iso_code,
        location: geo_location.location,
    })
}

/// Drains a stream of stored nodes and enriches each one in order.
///
/// # Errors
///
/// Returns the first `StoreError` the stream yields. Nothing enriched so far
/// is returned in that case: a store error means the inventory can't be
/// trusted as a whole.
pub async fn enrich_nodes<S>(
    nodes: S,
    geo: &GeoResolver,
    asn: &AsnResolver,
    stats: &ProcessingStats,
) -> Result<EnrichedBatch, StoreError>
where
    S: Stream<Item = Result<StoredNode, StoreError>>,
{
    futures::pin_mut!(nodes);

    let mut batch = EnrichedBatch::default();
    while let Some(node) = nodes.try_next().await? {
        batch.total_nodes += 1;
        if let Some(record) = enrich_node(&node, geo, asn, stats) {
            batch.nodes.push(record);
        }
    }

    Ok(batch)
}
