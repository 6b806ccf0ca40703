//! Stored node records.
//!
//! Decodes rows of the crawler's `nodes` table. Every column is decoded
//! explicitly; any failure is a schema mismatch and ends the run.

use futures::{Stream, StreamExt};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool};

use crate::config::{NODE_COLUMNS, SELECT_NODES_QUERY};
use crate::error_handling::StoreError;

/// One crawled node as persisted by the crawler.
///
/// `country`, `city` and `coordinates` are cached from crawl time. They are
/// decoded to validate the row but never reused: geo data is always
/// recomputed from the current indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredNode {
    /// Opaque node identifier
    pub id: String,
    /// IP address in string form (may be empty or malformed)
    pub ip: String,
    /// Crawl timestamp of the record
    pub now: String,
    /// Client implementation label
    pub client_type: String,
    /// Network the node was observed on
    pub network_id: u64,
    /// Crawl-time country (stale)
    pub country: String,
    /// Crawl-time city (stale)
    pub city: String,
    /// Crawl-time coordinates (stale)
    pub coordinates: String,
    /// Last observation timestamp
    pub last_seen: String,
    /// First observation timestamp
    pub first_seen: String,
}

impl StoredNode {
    /// Decodes all ten columns of a `nodes` row.
    ///
    /// # Errors
    ///
    /// - `StoreError::ColumnCount` if the row does not carry exactly ten columns
    /// - `StoreError::Decode` if a column is NULL or of an incompatible type, or
    ///   if `NetworkID` is negative
    pub fn from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        if row.len() != NODE_COLUMNS.len() {
            return Err(StoreError::ColumnCount {
                expected: NODE_COLUMNS.len(),
                actual: row.len(),
            });
        }

        let network_id: i64 = column(row, "NetworkID")?;
        let network_id = u64::try_from(network_id).map_err(|_| StoreError::Decode {
            column: "NetworkID",
            reason: format!("{network_id} is not an unsigned 64-bit value"),
        })?;

        Ok(Self {
            id: column(row, "ID")?,
            ip: column(row, "IP")?,
            now: column(row, "Now")?,
            client_type: column(row, "ClientType")?,
            network_id,
            country: column(row, "Country")?,
            city: column(row, "City")?,
            coordinates: column(row, "Coordinates")?,
            last_seen: column(row, "LastSeen")?,
            first_seen: column(row, "FirstSeen")?,
        })
    }
}

fn column<'r, T>(row: &'r SqliteRow, name: &'static str) -> Result<T, StoreError>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name).map_err(|e| StoreError::Decode {
        column: name,
        reason: e.to_string(),
    })
}

/// Streams every stored node in the store's natural order.
///
/// The stream is lazy: rows are fetched and decoded as it is polled. The first
/// error ends the useful part of the stream; callers stop at it.
pub fn stream_nodes(pool: &SqlitePool) -> impl Stream<Item = Result<StoredNode, StoreError>> + '_ {
    sqlx::query(SELECT_NODES_QUERY)
        .fetch(pool)
        .map(|row| StoredNode::from_row(&row?))
}
