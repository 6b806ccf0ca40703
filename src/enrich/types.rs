//! Enriched output records.

use serde::{Deserialize, Serialize};

use crate::geoip::Location;

/// One node as written to the output artifact.
///
/// Field names and order are the artifact's external contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedNode {
    /// IP address exactly as stored
    pub ip: String,
    /// Organization owning the address's network, empty if unknown
    pub asn: String,
    /// ISO country code, empty if unknown
    pub country: String,
    /// Location of the address, zero-valued if unknown
    pub location: Location,
}

/// Everything the pipeline produced from one pass over the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedBatch {
    /// Stored nodes read, including skipped ones
    pub total_nodes: usize,
    /// Enriched records in store order
    pub nodes: Vec<EnrichedNode>,
}

impl EnrichedBatch {
    /// Nodes dropped for an unparseable IP address.
    pub fn skipped(&self) -> usize {
        self.total_nodes - self.nodes.len()
    }
}
