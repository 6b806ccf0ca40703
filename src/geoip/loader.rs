//! Index loading.
//!
//! Reads a MaxMind DB file fully into memory and validates it. The resulting
//! reader is immutable and can be shared across threads.

use std::path::Path;

use maxminddb::Reader;

use super::metadata::extract_metadata;
use super::types::IndexMetadata;
use crate::error_handling::GeoIpError;

/// Loads an index from a local file.
///
/// # Errors
///
/// - `GeoIpError::Read` if the file cannot be read
/// - `GeoIpError::InvalidDatabase` if the bytes are not a MaxMind DB
pub(crate) async fn load_from_file(
    path: &Path,
) -> Result<(Reader<Vec<u8>>, IndexMetadata), GeoIpError> {
    let source = path.display().to_string();
    let db_bytes = tokio::fs::read(path).await.map_err(|e| GeoIpError::Read {
        path: source.clone(),
        source: e,
    })?;

    load_from_bytes(db_bytes, &source)
}

/// Builds a reader from index bytes already in memory.
pub(crate) fn load_from_bytes(
    db_bytes: Vec<u8>,
    source: &str,
) -> Result<(Reader<Vec<u8>>, IndexMetadata), GeoIpError> {
    let reader = Reader::from_source(db_bytes).map_err(|e| GeoIpError::InvalidDatabase {
        path: source.to_string(),
        source: e,
    })?;
    let metadata = extract_metadata(&reader, source);

    log::info!(
        "Loaded {} index from {} ({})",
        metadata.database_type,
        metadata.source,
        metadata.version
    );

    Ok((reader, metadata))
}
