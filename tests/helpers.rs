// Shared test helpers for node store setup.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;

use node_enrich::Config;

/// Creates a crawler-shaped node store at `store_path` containing one row per
/// `(id, ip)` pair.
#[allow(dead_code)] // Used by other test files
pub async fn create_node_store(store_path: &Path, nodes: &[(&str, &str)]) {
    let options = SqliteConnectOptions::new()
        .filename(store_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options)
        .await
        .expect("Failed to create test store");

    sqlx::query(
        "CREATE TABLE nodes (
            ID TEXT NOT NULL,
            IP TEXT NOT NULL,
            Now TEXT NOT NULL,
            ClientType TEXT NOT NULL,
            NetworkID INTEGER NOT NULL,
            Country TEXT NOT NULL,
            City TEXT NOT NULL,
            Coordinates TEXT NOT NULL,
            LastSeen TEXT NOT NULL,
            FirstSeen TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .expect("Failed to create nodes table");

    for (id, ip) in nodes {
        sqlx::query(
            "INSERT INTO nodes VALUES (?, ?, '2024-01-01 00:00:00', 'geth', 1, '', '', '', \
             '2024-01-01 00:00:00', '2023-12-01 00:00:00')",
        )
        .bind(*id)
        .bind(*ip)
        .execute(&pool)
        .await
        .expect("Failed to insert test node");
    }

    pool.close().await;
}

/// Config with every path pointing into `dir`. Nothing is created.
#[allow(dead_code)] // Used by other test files
pub fn config_in(dir: &Path) -> Config {
    Config {
        store_path: dir.join("crawler.db"),
        geo_db_path: dir.join("GeoLite2-City.mmdb"),
        asn_db_path: dir.join("GeoLite2-ASN.mmdb"),
        output_path: dir.join("html").join("nodes.json"),
        ..Default::default()
    }
}

/// Writes bytes that are not a MaxMind DB to `path`.
#[allow(dead_code)] // Used by other test files
pub fn write_corrupt_index(path: &Path) {
    std::fs::write(path, b"this is not a maxmind database").expect("Failed to write index");
}
