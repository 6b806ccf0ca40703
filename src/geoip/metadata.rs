//! Metadata extraction for lookup indexes.

use maxminddb::Reader;

use super::types::IndexMetadata;

/// Extracts metadata from a loaded index
pub(crate) fn extract_metadata<T: AsRef<[u8]>>(reader: &Reader<T>, source: &str) -> IndexMetadata {
    IndexMetadata {
        source: source.to_string(),
        database_type: reader.metadata.database_type.clone(),
        version: format!("build_{}", reader.metadata.build_epoch),
        ip_version: reader.metadata.ip_version,
    }
}
