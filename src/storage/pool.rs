//! Node store connection management.
//!
//! The store belongs to the crawler: it is opened read-only and is never
//! created, so a missing file is reported instead of silently replaced by an
//! empty database.

use std::path::Path;

use log::{debug, error};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::StoreError;

/// Opens the node store at `store_path`.
///
/// A single connection is enough: the run issues one query and streams it.
/// The caller owns the returned pool and must `close()` it on every exit path.
///
/// # Errors
///
/// Returns `StoreError::Open` if the file is missing, unreadable, or not a
/// SQLite database.
pub async fn open_store(store_path: &Path) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::new()
        .filename(store_path)
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open node store {}: {e}", store_path.display());
            StoreError::Open {
                path: store_path.display().to_string(),
                source: e,
            }
        })?;

    debug!("Opened node store {}", store_path.display());
    Ok(pool)
}
